//! Static directory of states, their institutions, and their scholarships.
//!
//! Loaded nowhere and mutated never: the table is compiled in. `lookup` is
//! the only entry point, keyed by the kebab-case state identifier, and a
//! miss is a miss. Unknown ids do not get invented placeholder data.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InstitutionKind {
    University,
    College,
    Institute,
    Iit,
    Medical,
}

impl InstitutionKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::University => "University",
            Self::College => "College",
            Self::Institute => "Institute",
            Self::Iit => "IIT",
            Self::Medical => "Medical",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Institution {
    pub name: &'static str,
    pub kind: InstitutionKind,
    pub ranking: &'static str,
    pub specialty: &'static str,
    pub website: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Scholarship {
    pub name: &'static str,
    pub amount: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StateRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub known_for: &'static str,
    pub institutions: &'static [Institution],
    pub scholarships: &'static [Scholarship],
}

impl StateRecord {
    pub fn has_kind(&self, kind: InstitutionKind) -> bool {
        self.institutions.iter().any(|i| i.kind == kind)
    }
}

/// Looks up a state by identifier. `None` means no data, which the caller
/// must surface as such.
pub fn lookup(id: &str) -> Option<&'static StateRecord> {
    STATES.iter().find(|s| s.id == id)
}

use InstitutionKind::{Iit, Institute, University};

pub const STATES: &[StateRecord] = &[
    StateRecord {
        id: "jammu-kashmir",
        name: "Jammu & Kashmir",
        known_for: "Tourism, Agriculture, Education",
        institutions: &[
            Institution { name: "University of Kashmir", kind: University, ranking: "State University", specialty: "Multi-disciplinary", website: "https://www.kashmiruniversity.net/" },
            Institution { name: "NIT Srinagar", kind: Institute, ranking: "Top NIT", specialty: "Engineering", website: "https://nitsri.ac.in/" },
            Institution { name: "University of Jammu", kind: University, ranking: "State University", specialty: "Multi-disciplinary", website: "https://www.jammuuniversity.ac.in/" },
        ],
        scholarships: &[
            Scholarship { name: "J&K SC/ST Scholarship", amount: "₹10,000/year" },
            Scholarship { name: "J&K Minority Scholarship", amount: "₹8,000/year" },
        ],
    },
    StateRecord {
        id: "himachal-pradesh",
        name: "Himachal Pradesh",
        known_for: "Tourism, Agriculture, Education",
        institutions: &[
            Institution { name: "IIT Mandi", kind: Iit, ranking: "New IIT", specialty: "Engineering & Technology", website: "https://www.iitmandi.ac.in/" },
            Institution { name: "Himachal Pradesh University", kind: University, ranking: "State University", specialty: "Multi-disciplinary", website: "https://hpuniv.ac.in/" },
            Institution { name: "NIT Hamirpur", kind: Institute, ranking: "Top NIT", specialty: "Engineering", website: "https://nith.ac.in/" },
        ],
        scholarships: &[
            Scholarship { name: "HP SC/ST Scholarship", amount: "₹12,000/year" },
            Scholarship { name: "HP OBC Merit Scholarship", amount: "₹8,000/year" },
        ],
    },
    StateRecord {
        id: "punjab",
        name: "Punjab",
        known_for: "Agriculture, Engineering, Medical",
        institutions: &[
            Institution { name: "IIT Ropar", kind: Iit, ranking: "New IIT", specialty: "Engineering & Technology", website: "https://www.iitropar.ac.in/" },
            Institution { name: "Punjab University", kind: University, ranking: "State University", specialty: "Multi-disciplinary", website: "https://puchd.ac.in/" },
            Institution { name: "Thapar University", kind: University, ranking: "Top Private", specialty: "Engineering", website: "https://thapar.edu/" },
        ],
        scholarships: &[
            Scholarship { name: "Punjab SC/ST Scholarship", amount: "₹15,000/year" },
            Scholarship { name: "Punjab OBC Merit Scholarship", amount: "₹10,000/year" },
        ],
    },
    StateRecord {
        id: "haryana",
        name: "Haryana",
        known_for: "Agriculture, Industry, Education",
        institutions: &[
            Institution { name: "IIT Roorkee", kind: Iit, ranking: "Top 10 IIT", specialty: "Engineering & Technology", website: "https://www.iitr.ac.in/" },
            Institution { name: "Kurukshetra University", kind: University, ranking: "State University", specialty: "Multi-disciplinary", website: "https://kuk.ac.in/" },
            Institution { name: "Manav Rachna University", kind: University, ranking: "Top Private", specialty: "Engineering & Management", website: "https://manavrachna.edu.in/" },
        ],
        scholarships: &[
            Scholarship { name: "Haryana SC/ST Scholarship", amount: "₹12,000/year" },
            Scholarship { name: "Haryana OBC Merit Scholarship", amount: "₹8,000/year" },
        ],
    },
    StateRecord {
        id: "rajasthan",
        name: "Rajasthan",
        known_for: "Tourism, Engineering, Medical",
        institutions: &[
            Institution { name: "IIT Jodhpur", kind: Iit, ranking: "New IIT", specialty: "Engineering & Technology", website: "https://www.iitj.ac.in/" },
            Institution { name: "BITS Pilani", kind: University, ranking: "Top Private", specialty: "Engineering & Sciences", website: "https://www.bits-pilani.ac.in/" },
            Institution { name: "MNIT Jaipur", kind: Institute, ranking: "Top NIT", specialty: "Engineering", website: "https://mnit.ac.in/" },
        ],
        scholarships: &[
            Scholarship { name: "Rajasthan SC/ST Scholarship", amount: "₹10,000/year" },
            Scholarship { name: "Rajasthan OBC Merit Scholarship", amount: "₹8,000/year" },
        ],
    },
    StateRecord {
        id: "uttar-pradesh",
        name: "Uttar Pradesh",
        known_for: "Engineering, Medical, Law, Management",
        institutions: &[
            Institution { name: "IIT Kanpur", kind: Iit, ranking: "Top 5 IIT", specialty: "Engineering & Technology", website: "https://www.iitk.ac.in/" },
            Institution { name: "BHU Varanasi", kind: University, ranking: "Central University", specialty: "Multi-disciplinary", website: "https://www.bhu.ac.in/" },
            Institution { name: "AMU Aligarh", kind: University, ranking: "Central University", specialty: "Multi-disciplinary", website: "https://www.amu.ac.in/" },
            Institution { name: "IIT BHU", kind: Iit, ranking: "Top IIT", specialty: "Engineering", website: "https://iitbhu.ac.in/" },
            Institution { name: "Lucknow University", kind: University, ranking: "State University", specialty: "Arts & Sciences", website: "https://www.lkouniv.ac.in/" },
            Institution { name: "JSS Academy", kind: University, ranking: "Top Private", specialty: "Medical & Engineering", website: "https://www.jssaten.ac.in/" },
            Institution { name: "Galgotias University", kind: University, ranking: "Top Private", specialty: "Multi-disciplinary", website: "https://www.galgotiasuniversity.edu.in/" },
        ],
        scholarships: &[
            Scholarship { name: "UP SC/ST Post-Matric Scholarship", amount: "₹12,000/year" },
            Scholarship { name: "UP OBC Scholarship", amount: "₹8,000/year" },
            Scholarship { name: "UP Minority Scholarship", amount: "₹10,000/year" },
        ],
    },
    StateRecord {
        id: "madhya-pradesh",
        name: "Madhya Pradesh",
        known_for: "Engineering, Medical, Agriculture",
        institutions: &[
            Institution { name: "IIT Indore", kind: Iit, ranking: "New IIT", specialty: "Engineering & Technology", website: "https://www.iiti.ac.in/" },
            Institution { name: "Bhopal University", kind: University, ranking: "State University", specialty: "Multi-disciplinary", website: "https://www.bubhopal.ac.in/" },
            Institution { name: "NIT Bhopal", kind: Institute, ranking: "Top NIT", specialty: "Engineering", website: "https://www.manit.ac.in/" },
        ],
        scholarships: &[
            Scholarship { name: "MP SC/ST Scholarship", amount: "₹12,000/year" },
            Scholarship { name: "MP OBC Merit Scholarship", amount: "₹8,000/year" },
        ],
    },
    StateRecord {
        id: "gujarat",
        name: "Gujarat",
        known_for: "Engineering, Business, Industry",
        institutions: &[
            Institution { name: "IIT Gandhinagar", kind: Iit, ranking: "New IIT", specialty: "Engineering & Technology", website: "https://www.iitgn.ac.in/" },
            Institution { name: "Gujarat University", kind: University, ranking: "State University", specialty: "Multi-disciplinary", website: "https://www.gujaratuniversity.ac.in/" },
            Institution { name: "NIT Surat", kind: Institute, ranking: "Top NIT", specialty: "Engineering", website: "https://www.svnit.ac.in/" },
        ],
        scholarships: &[
            Scholarship { name: "Gujarat SC/ST Scholarship", amount: "₹15,000/year" },
            Scholarship { name: "Gujarat OBC Merit Scholarship", amount: "₹10,000/year" },
        ],
    },
    StateRecord {
        id: "maharashtra",
        name: "Maharashtra",
        known_for: "Engineering, Medical, Management, Arts",
        institutions: &[
            Institution { name: "IIT Bombay", kind: Iit, ranking: "Top 3 IIT", specialty: "Engineering & Technology", website: "https://www.iitb.ac.in/" },
            Institution { name: "Mumbai University", kind: University, ranking: "State University", specialty: "Multi-disciplinary", website: "https://mu.ac.in/" },
            Institution { name: "Pune University", kind: University, ranking: "State University", specialty: "Multi-disciplinary", website: "https://www.unipune.ac.in/" },
            Institution { name: "SPPU", kind: University, ranking: "State University", specialty: "Multi-disciplinary", website: "https://www.unipune.ac.in/" },
        ],
        scholarships: &[
            Scholarship { name: "Maharashtra SC Post-Matric Scholarship", amount: "₹15,000/year" },
            Scholarship { name: "Rajarshi Shahu SC Scholarship", amount: "₹10,000/year" },
            Scholarship { name: "Dr. Panjabrao Deshmukh OBC Scholarship", amount: "₹12,000/year" },
            Scholarship { name: "Maharashtra Minority Scholarship", amount: "₹8,000/year" },
        ],
    },
    StateRecord {
        id: "chhattisgarh",
        name: "Chhattisgarh",
        known_for: "Engineering, Medical, Agriculture",
        institutions: &[
            Institution { name: "NIT Raipur", kind: Institute, ranking: "Top NIT", specialty: "Engineering", website: "https://www.nitrr.ac.in/" },
            Institution { name: "Pt. Ravishankar Shukla University", kind: University, ranking: "State University", specialty: "Multi-disciplinary", website: "https://www.prsu.ac.in/" },
        ],
        scholarships: &[
            Scholarship { name: "CG SC/ST Scholarship", amount: "₹10,000/year" },
            Scholarship { name: "CG OBC Merit Scholarship", amount: "₹8,000/year" },
        ],
    },
    StateRecord {
        id: "jharkhand",
        name: "Jharkhand",
        known_for: "Engineering, Medical, Mining",
        institutions: &[
            Institution { name: "IIT Dhanbad", kind: Iit, ranking: "Top IIT", specialty: "Engineering & Mining", website: "https://www.iitism.ac.in/" },
            Institution { name: "Ranchi University", kind: University, ranking: "State University", specialty: "Multi-disciplinary", website: "https://www.ranchiuniversity.ac.in/" },
        ],
        scholarships: &[
            Scholarship { name: "Jharkhand SC/ST Scholarship", amount: "₹12,000/year" },
            Scholarship { name: "Jharkhand OBC Merit Scholarship", amount: "₹8,000/year" },
        ],
    },
    StateRecord {
        id: "bihar",
        name: "Bihar",
        known_for: "Engineering, Medical, Law",
        institutions: &[
            Institution { name: "IIT Patna", kind: Iit, ranking: "New IIT", specialty: "Engineering & Technology", website: "https://www.iitp.ac.in/" },
            Institution { name: "Patna University", kind: University, ranking: "State University", specialty: "Multi-disciplinary", website: "https://www.patnauniversity.ac.in/" },
        ],
        scholarships: &[
            Scholarship { name: "Bihar SC/ST Post-Matric Scholarship", amount: "₹12,000/year" },
            Scholarship { name: "Bihar OBC Scholarship", amount: "₹8,000/year" },
        ],
    },
    StateRecord {
        id: "odisha",
        name: "Odisha",
        known_for: "Engineering, Medical, Technology",
        institutions: &[
            Institution { name: "IIT Bhubaneswar", kind: Iit, ranking: "New IIT", specialty: "Engineering & Technology", website: "https://www.iitbbs.ac.in/" },
            Institution { name: "Utkal University", kind: University, ranking: "State University", specialty: "Multi-disciplinary", website: "https://utkaluniversity.nic.in/" },
        ],
        scholarships: &[
            Scholarship { name: "Odisha SC/ST Scholarship", amount: "₹12,000/year" },
            Scholarship { name: "Odisha OBC Merit Scholarship", amount: "₹8,000/year" },
        ],
    },
    StateRecord {
        id: "telangana",
        name: "Telangana",
        known_for: "Engineering, Medical, IT",
        institutions: &[
            Institution { name: "IIT Hyderabad", kind: Iit, ranking: "New IIT", specialty: "Engineering & Technology", website: "https://www.iith.ac.in/" },
            Institution { name: "Osmania University", kind: University, ranking: "State University", specialty: "Multi-disciplinary", website: "https://www.osmania.ac.in/" },
        ],
        scholarships: &[
            Scholarship { name: "Telangana SC/ST Scholarship", amount: "₹15,000/year" },
            Scholarship { name: "Telangana OBC Merit Scholarship", amount: "₹10,000/year" },
        ],
    },
    StateRecord {
        id: "andhra-pradesh",
        name: "Andhra Pradesh",
        known_for: "Engineering, Medical, Agriculture",
        institutions: &[
            Institution { name: "IIT Tirupati", kind: Iit, ranking: "New IIT", specialty: "Engineering & Technology", website: "https://www.iittp.ac.in/" },
            Institution { name: "Andhra University", kind: University, ranking: "State University", specialty: "Multi-disciplinary", website: "https://www.andhrauniversity.edu.in/" },
        ],
        scholarships: &[
            Scholarship { name: "AP SC/ST Scholarship", amount: "₹12,000/year" },
            Scholarship { name: "AP OBC Merit Scholarship", amount: "₹8,000/year" },
        ],
    },
    StateRecord {
        id: "karnataka",
        name: "Karnataka",
        known_for: "Engineering, Medical, IT, Management",
        institutions: &[
            Institution { name: "IISc Bangalore", kind: Institute, ranking: "Top Research Institute", specialty: "Science & Engineering", website: "https://www.iisc.ac.in/" },
            Institution { name: "Bangalore University", kind: University, ranking: "State University", specialty: "Multi-disciplinary", website: "https://bangaloreuniversity.ac.in/" },
            Institution { name: "Manipal University", kind: University, ranking: "Top Private", specialty: "Multi-disciplinary", website: "https://manipal.edu/" },
        ],
        scholarships: &[
            Scholarship { name: "Karnataka SC/ST Post-Matric Scholarship", amount: "₹12,000/year" },
            Scholarship { name: "Karnataka OBC Merit Scholarship", amount: "₹8,000/year" },
            Scholarship { name: "Karnataka Minority Scholarship", amount: "₹10,000/year" },
        ],
    },
    StateRecord {
        id: "tamil-nadu",
        name: "Tamil Nadu",
        known_for: "Engineering, Medical, Arts, Management",
        institutions: &[
            Institution { name: "IIT Madras", kind: Iit, ranking: "Top 3 IIT", specialty: "Engineering & Technology", website: "https://www.iitm.ac.in/" },
            Institution { name: "Anna University", kind: University, ranking: "State University", specialty: "Engineering & Technology", website: "https://www.annauniv.edu/" },
            Institution { name: "VIT Vellore", kind: University, ranking: "Top Private", specialty: "Engineering & Technology", website: "https://vit.ac.in/" },
        ],
        scholarships: &[
            Scholarship { name: "TN SC/ST Post-Matric Scholarship", amount: "₹10,000/year" },
            Scholarship { name: "TN First Graduate Scheme", amount: "Fee Waiver" },
            Scholarship { name: "TN Minority Scholarship", amount: "₹8,000/year" },
            Scholarship { name: "TN OBC Scholarship", amount: "₹9,000/year" },
        ],
    },
    StateRecord {
        id: "kerala",
        name: "Kerala",
        known_for: "Medical, Engineering, Arts",
        institutions: &[
            Institution { name: "IIT Palakkad", kind: Iit, ranking: "New IIT", specialty: "Engineering & Technology", website: "https://www.iitpkd.ac.in/" },
            Institution { name: "Kerala University", kind: University, ranking: "State University", specialty: "Multi-disciplinary", website: "https://www.keralauniversity.ac.in/" },
        ],
        scholarships: &[
            Scholarship { name: "Kerala SC/ST Scholarship", amount: "₹12,000/year" },
            Scholarship { name: "Kerala Minority Scholarship", amount: "₹10,000/year" },
        ],
    },
    StateRecord {
        id: "goa",
        name: "Goa",
        known_for: "Tourism, Engineering, Medical",
        institutions: &[
            Institution { name: "Goa University", kind: University, ranking: "State University", specialty: "Multi-disciplinary", website: "https://www.unigoa.ac.in/" },
            Institution { name: "NIT Goa", kind: Institute, ranking: "New NIT", specialty: "Engineering", website: "https://www.nitgoa.ac.in/" },
        ],
        scholarships: &[
            Scholarship { name: "Goa SC/ST Scholarship", amount: "₹10,000/year" },
            Scholarship { name: "Goa OBC Merit Scholarship", amount: "₹8,000/year" },
        ],
    },
    StateRecord {
        id: "uttarakhand",
        name: "Uttarakhand",
        known_for: "Engineering, Medical, Tourism",
        institutions: &[
            Institution { name: "IIT Roorkee", kind: Iit, ranking: "Top 10 IIT", specialty: "Engineering & Technology", website: "https://www.iitr.ac.in/" },
            Institution { name: "Uttarakhand University", kind: University, ranking: "State University", specialty: "Multi-disciplinary", website: "https://www.uudoon.org/" },
        ],
        scholarships: &[
            Scholarship { name: "Uttarakhand SC/ST Scholarship", amount: "₹12,000/year" },
            Scholarship { name: "Uttarakhand OBC Merit Scholarship", amount: "₹8,000/year" },
        ],
    },
    StateRecord {
        id: "west-bengal",
        name: "West Bengal",
        known_for: "Engineering, Medical, Arts, Sciences",
        institutions: &[
            Institution { name: "IIT Kharagpur", kind: Iit, ranking: "Top 5 IIT", specialty: "Engineering & Technology", website: "https://www.iitkgp.ac.in/" },
            Institution { name: "Jadavpur University", kind: University, ranking: "State University", specialty: "Engineering & Technology", website: "https://www.jadavpuruniversity.in/" },
            Institution { name: "Presidency University", kind: University, ranking: "State University", specialty: "Arts & Sciences", website: "https://www.presiuniv.ac.in/" },
        ],
        scholarships: &[
            Scholarship { name: "WB Swami Vivekananda Merit Cum Means Scholarship", amount: "Varies" },
            Scholarship { name: "WB Kanyashree Prakalpa (Girls)", amount: "₹1,000-₹25,000" },
            Scholarship { name: "WB Aikyashree Minority Scholarship", amount: "₹10,000/year" },
        ],
    },
    StateRecord {
        id: "delhi",
        name: "Delhi",
        known_for: "Engineering, Medical, Management, Arts",
        institutions: &[
            Institution { name: "IIT Delhi", kind: Iit, ranking: "Top 5 IIT", specialty: "Engineering & Technology", website: "https://www.iitd.ac.in/" },
            Institution { name: "Delhi University", kind: University, ranking: "Central University", specialty: "Multi-disciplinary", website: "https://www.du.ac.in/" },
            Institution { name: "JNU", kind: University, ranking: "Central University", specialty: "Social Sciences & Languages", website: "https://www.jnu.ac.in/" },
        ],
        scholarships: &[
            Scholarship { name: "Delhi SC/ST Scholarship", amount: "₹12,000/year" },
            Scholarship { name: "Delhi Minority Scholarship", amount: "₹10,000/year" },
            Scholarship { name: "Delhi OBC Merit Scholarship", amount: "₹8,000/year" },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delhi_has_institutions_and_scholarships() {
        let delhi = lookup("delhi").unwrap();
        assert!(!delhi.institutions.is_empty());
        assert!(!delhi.scholarships.is_empty());
        assert_eq!(delhi.name, "Delhi");
    }

    #[test]
    fn unknown_id_is_a_miss_not_a_fallback() {
        assert!(lookup("nonexistent-id").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn identifiers_are_unique() {
        for (i, a) in STATES.iter().enumerate() {
            for b in &STATES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn every_state_is_fully_populated() {
        for state in STATES {
            assert!(!state.institutions.is_empty(), "{} has no institutions", state.id);
            assert!(!state.scholarships.is_empty(), "{} has no scholarships", state.id);
            for inst in state.institutions {
                assert!(inst.website.starts_with("https://"), "{}: {}", state.id, inst.name);
            }
        }
    }

    #[test]
    fn kind_queries() {
        let karnataka = lookup("karnataka").unwrap();
        assert!(karnataka.has_kind(InstitutionKind::Institute));
        assert!(karnataka.has_kind(InstitutionKind::University));
        assert!(!karnataka.has_kind(InstitutionKind::Medical));
    }
}

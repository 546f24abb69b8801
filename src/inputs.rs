//! A text field and a slider backed by one buffer, so they can never drift.

use crate::format::format_inr;

/// How a bound input renders its human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Rupees,
    Years,
    Percent,
}

/// One parameter's paired controls. The edit buffer is the single source of
/// truth: typing mutates it directly, slider nudges parse it, step, clamp,
/// and write the plain number back. The formatted label is derived on read.
#[derive(Debug, Clone)]
pub struct BoundInput {
    buffer: String,
    min: f64,
    max: f64,
    step: f64,
    allow_decimal: bool,
    label: LabelKind,
}

impl BoundInput {
    pub fn new(initial: f64, min: f64, max: f64, step: f64, label: LabelKind) -> Self {
        let mut input = Self {
            buffer: String::new(),
            min,
            max,
            step,
            allow_decimal: !matches!(label, LabelKind::Years),
            label,
        };
        input.write_value(initial);
        input
    }

    /// Raw text as the engine will see it.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Replaces the whole buffer, as if the user retyped the field.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
    }

    /// Typed character. Digits always; a dot only where decimals make sense.
    /// No further validation: malformed text flows through and the engine
    /// declines it.
    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_digit() || (self.allow_decimal && c == '.') {
            self.buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Slider nudge up. Parses the buffer (falling back to the lower bound
    /// when unparseable), steps, clamps, and writes back.
    pub fn increase(&mut self) {
        let next = self.parsed().unwrap_or(self.min) + self.step;
        self.write_value(next.clamp(self.min, self.max));
    }

    pub fn decrease(&mut self) {
        let next = self.parsed().unwrap_or(self.min) - self.step;
        self.write_value(next.clamp(self.min, self.max));
    }

    pub fn parsed(&self) -> Option<f64> {
        self.buffer.trim().parse().ok().filter(|v: &f64| v.is_finite())
    }

    /// Slider position in [0, 1] for gauge rendering.
    pub fn slider_ratio(&self) -> f64 {
        let value = self.parsed().unwrap_or(self.min).clamp(self.min, self.max);
        if self.max > self.min {
            (value - self.min) / (self.max - self.min)
        } else {
            0.0
        }
    }

    pub fn formatted_label(&self) -> String {
        match (self.label, self.parsed()) {
            (_, None) => String::new(),
            (LabelKind::Rupees, Some(v)) => format!("₹ {}", format_inr(v)),
            (LabelKind::Years, Some(v)) => format!("{} years", trim_number(v)),
            (LabelKind::Percent, Some(v)) => format!("{}%", trim_number(v)),
        }
    }

    fn write_value(&mut self, value: f64) {
        self.buffer = trim_number(value);
    }
}

/// Plain decimal rendering without float noise: integers bare, otherwise up
/// to two decimals with trailing zeros dropped.
fn trim_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract().abs() < 1e-9 {
        format!("{}", rounded as i64)
    } else {
        let s = format!("{rounded:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount_input() -> BoundInput {
        BoundInput::new(1_000_000.0, 100_000.0, 20_000_000.0, 50_000.0, LabelKind::Rupees)
    }

    #[test]
    fn text_edit_moves_slider_and_label() {
        let mut input = amount_input();
        input.set_text("750000");
        assert_eq!(input.parsed(), Some(750_000.0));
        let expected = (750_000.0 - 100_000.0) / (20_000_000.0 - 100_000.0);
        assert!((input.slider_ratio() - expected).abs() < 1e-12);
        assert_eq!(input.formatted_label(), "₹ 7,50,000");
    }

    #[test]
    fn nudge_writes_back_to_text() {
        let mut input = amount_input();
        input.increase();
        assert_eq!(input.text(), "1050000");
        input.decrease();
        input.decrease();
        assert_eq!(input.text(), "950000");
    }

    #[test]
    fn nudge_clamps_at_bounds() {
        let mut input = BoundInput::new(19_990_000.0, 100_000.0, 20_000_000.0, 50_000.0, LabelKind::Rupees);
        input.increase();
        assert_eq!(input.parsed(), Some(20_000_000.0));
        input.increase();
        assert_eq!(input.parsed(), Some(20_000_000.0));
    }

    #[test]
    fn rate_steps_stay_tidy() {
        let mut rate = BoundInput::new(8.5, 1.0, 20.0, 0.1, LabelKind::Percent);
        rate.increase();
        assert_eq!(rate.text(), "8.6");
        assert_eq!(rate.formatted_label(), "8.6%");
        for _ in 0..3 {
            rate.decrease();
        }
        assert_eq!(rate.text(), "8.3");
    }

    #[test]
    fn years_reject_decimal_point() {
        let mut years = BoundInput::new(5.0, 1.0, 20.0, 1.0, LabelKind::Years);
        years.push_char('.');
        years.push_char('7');
        assert_eq!(years.text(), "57");
        assert_eq!(years.formatted_label(), "57 years");
    }

    #[test]
    fn malformed_text_is_kept_not_judged() {
        let mut input = amount_input();
        input.set_text("12.34.56");
        assert_eq!(input.parsed(), None);
        assert_eq!(input.formatted_label(), "");
        // Slider falls back to its lower bound until the text parses again.
        assert_eq!(input.slider_ratio(), 0.0);
    }
}

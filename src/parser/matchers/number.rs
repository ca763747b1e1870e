use crate::error::JsonError;
use crate::parser::state::{Action, MatcherContext, Transition};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Before any digit; `negative` may already be set from a leading `-`.
    Start,
    /// At least one integer digit has been consumed.
    IntDigits,
    /// Just consumed `.`; at least one fraction digit is required.
    FracFirstDigit,
    /// At least one fraction digit has been consumed.
    FracDigits,
    /// Just consumed `e`/`E`, possibly followed by a sign; a digit is
    /// required next.
    ExpFirstDigit,
    /// At least one exponent digit has been consumed.
    ExpDigits,
}

fn accepting(phase: Phase) -> bool {
    matches!(phase, Phase::IntDigits | Phase::FracDigits | Phase::ExpDigits)
}

/// Accumulates a JSON number, grounded on `peejay::number_matcher` in
/// `original_source/include/peejay/matchers/number.hpp`: an unsigned integer
/// accumulator that is promoted to a float accumulator (`int_value` +
/// `frac_part`/`frac_digits` + signed `exponent`) the moment a `.` or `e`/`E`
/// is seen.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NumberMatcher {
    phase: Phase,
    negative: bool,
    leading_zero: bool,
    int_value: u64,
    is_float: bool,
    frac_part: f64,
    frac_digits: u32,
    exponent: i64,
    exponent_negative: bool,
}

impl NumberMatcher {
    pub(crate) fn new() -> Self {
        Self {
            phase: Phase::Start,
            negative: false,
            leading_zero: false,
            int_value: 0,
            is_float: false,
            frac_part: 0.0,
            frac_digits: 0,
            exponent: 0,
            exponent_negative: false,
        }
    }

    pub(crate) fn offer(&mut self, cp: Option<u32>, ctx: MatcherContext) -> Transition {
        let digit = cp.and_then(as_ascii_digit);
        match self.phase {
            Phase::Start => self.start(cp, digit),
            Phase::IntDigits => self.int_digits(cp, digit, ctx),
            Phase::FracFirstDigit => self.frac_first_digit(digit),
            Phase::FracDigits => self.frac_digits(cp, digit, ctx),
            Phase::ExpFirstDigit => self.exp_first_digit(cp, digit),
            Phase::ExpDigits => self.exp_digits(cp, digit, ctx),
        }
    }

    fn start(&mut self, cp: Option<u32>, digit: Option<u64>) -> Transition {
        if let Some(d) = digit {
            self.int_value = d;
            self.leading_zero = d == 0;
            self.phase = Phase::IntDigits;
            return Transition::consumed();
        }
        if cp == Some('-' as u32) && !self.negative {
            self.negative = true;
            return Transition::consumed();
        }
        Transition::Error(JsonError::ExpectedDigits)
    }

    fn int_digits(&mut self, cp: Option<u32>, digit: Option<u64>, ctx: MatcherContext) -> Transition {
        if let Some(d) = digit {
            if self.leading_zero {
                // "0" followed directly by another digit is not part of this
                // number; the trailing digit belongs to whatever is next.
                return self.end_of_number(ctx);
            }
            return match self.int_value.checked_mul(10).and_then(|v| v.checked_add(d)) {
                Some(v) => {
                    self.int_value = v;
                    Transition::consumed()
                }
                None => Transition::Error(JsonError::NumberOutOfRange),
            };
        }
        match cp {
            Some(c) if c == '.' as u32 => self.enter_frac(ctx),
            Some(c) if c == 'e' as u32 || c == 'E' as u32 => self.enter_exp(ctx),
            _ => self.end_of_number(ctx),
        }
    }

    fn enter_frac(&mut self, ctx: MatcherContext) -> Transition {
        if !ctx.float_enabled {
            return Transition::Error(JsonError::NumberOutOfRange);
        }
        self.is_float = true;
        self.phase = Phase::FracFirstDigit;
        Transition::consumed()
    }

    fn enter_exp(&mut self, ctx: MatcherContext) -> Transition {
        if !ctx.float_enabled {
            return Transition::Error(JsonError::NumberOutOfRange);
        }
        self.is_float = true;
        self.phase = Phase::ExpFirstDigit;
        Transition::consumed()
    }

    fn frac_first_digit(&mut self, digit: Option<u64>) -> Transition {
        match digit {
            Some(d) => {
                self.frac_part = self.frac_part * 10.0 + d as f64;
                self.frac_digits += 1;
                self.phase = Phase::FracDigits;
                Transition::consumed()
            }
            None => Transition::Error(JsonError::ExpectedDigits),
        }
    }

    fn frac_digits(&mut self, cp: Option<u32>, digit: Option<u64>, ctx: MatcherContext) -> Transition {
        if let Some(d) = digit {
            self.frac_part = self.frac_part * 10.0 + d as f64;
            self.frac_digits += 1;
            return Transition::consumed();
        }
        match cp {
            Some(c) if c == 'e' as u32 || c == 'E' as u32 => {
                self.phase = Phase::ExpFirstDigit;
                Transition::consumed()
            }
            _ => self.end_of_number(ctx),
        }
    }

    fn exp_first_digit(&mut self, cp: Option<u32>, digit: Option<u64>) -> Transition {
        if let Some(d) = digit {
            self.exponent = d as i64;
            self.phase = Phase::ExpDigits;
            return Transition::consumed();
        }
        match cp {
            Some(c) if c == '+' as u32 => Transition::consumed(),
            Some(c) if c == '-' as u32 => {
                self.exponent_negative = true;
                Transition::consumed()
            }
            _ => Transition::Error(JsonError::ExpectedDigits),
        }
    }

    fn exp_digits(&mut self, cp: Option<u32>, digit: Option<u64>, ctx: MatcherContext) -> Transition {
        if let Some(d) = digit {
            self.exponent = self.exponent.saturating_mul(10).saturating_add(d as i64);
            return Transition::consumed();
        }
        let _ = cp;
        self.end_of_number(ctx)
    }

    fn end_of_number(&mut self, ctx: MatcherContext) -> Transition {
        if !accepting(self.phase) {
            return Transition::Error(JsonError::ExpectedDigits);
        }
        if !self.is_float {
            return match self.finish_integer() {
                Some(v) => Transition::Reject { action: Some(Action::Integer(v)) },
                None => Transition::Error(JsonError::NumberOutOfRange),
            };
        }
        match self.finish_float(ctx) {
            Some(action) => Transition::Reject { action: Some(action) },
            None => Transition::Error(JsonError::NumberOutOfRange),
        }
    }

    fn finish_integer(&self) -> Option<i64> {
        if self.negative {
            if self.int_value == i64::MAX as u64 + 1 {
                Some(i64::MIN)
            } else if self.int_value <= i64::MAX as u64 {
                Some(-(self.int_value as i64))
            } else {
                None
            }
        } else if self.int_value <= i64::MAX as u64 {
            Some(self.int_value as i64)
        } else {
            None
        }
    }

    fn finish_float(&self, ctx: MatcherContext) -> Option<Action> {
        let magnitude = 10f64.powi(self.exponent.clamp(i32::MIN as i64, i32::MAX as i64) as i32);
        let scale = if self.exponent_negative { 1.0 / magnitude } else { magnitude };
        if !scale.is_finite() {
            return None;
        }
        let mantissa = self.int_value as f64 + self.frac_part / 10f64.powi(self.frac_digits as i32);
        let mut value = mantissa * scale;
        if self.negative {
            value = -value;
        }
        if !value.is_finite() {
            return None;
        }
        // 128*epsilon near-integer promotion, grounded on
        // `peejay::float_accumulator`'s integer-narrowing check.
        let near_integer_epsilon = 128.0 * f64::EPSILON;
        let truncated = value.trunc();
        if (value - truncated).abs() < near_integer_epsilon
            && truncated >= i64::MIN as f64
            && truncated <= i64::MAX as f64
        {
            return Some(Action::Integer(truncated as i64));
        }
        if !ctx.float_enabled {
            return None;
        }
        Some(Action::Float(value))
    }
}

fn as_ascii_digit(cp: u32) -> Option<u64> {
    if (b'0' as u32..=b'9' as u32).contains(&cp) {
        Some((cp - b'0' as u32) as u64)
    } else {
        None
    }
}

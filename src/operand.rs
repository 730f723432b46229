//! Rendering of check operands for failure diagnostics.

use std::borrow::Cow;

/// Digits after the decimal point when a floating point operand is printed.
pub const FLOAT_PRECISION: usize = 12;

/// A value that can appear on either side of a relational check.
///
/// Floating point values render fixed-point with [`FLOAT_PRECISION`] digits;
/// everything else renders the way `Display` does. Implement this for your
/// own types to use them with `check_equal!` and friends.
pub trait Operand {
    fn render(&self) -> String;
}

macro_rules! display_operand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Operand for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

macro_rules! float_operand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Operand for $ty {
                fn render(&self) -> String {
                    format!("{:.*}", FLOAT_PRECISION, self)
                }
            }
        )*
    };
}

display_operand!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String,
);
float_operand!(f32, f64);

impl Operand for () {
    fn render(&self) -> String {
        "()".to_string()
    }
}

impl<T: Operand + ?Sized> Operand for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: Operand + ?Sized> Operand for Box<T> {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl Operand for Cow<'_, str> {
    fn render(&self) -> String {
        self.as_ref().to_string()
    }
}

impl<T: Operand> Operand for Option<T> {
    fn render(&self) -> String {
        match self {
            Some(value) => format!("Some({})", value.render()),
            None => "None".to_string(),
        }
    }
}

impl<T: Operand> Operand for [T] {
    fn render(&self) -> String {
        let items: Vec<String> = self.iter().map(Operand::render).collect();
        format!("[{}]", items.join(", "))
    }
}

impl<T: Operand, const N: usize> Operand for [T; N] {
    fn render(&self) -> String {
        self.as_slice().render()
    }
}

impl<T: Operand> Operand for Vec<T> {
    fn render(&self) -> String {
        self.as_slice().render()
    }
}

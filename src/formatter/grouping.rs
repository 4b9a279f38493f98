/// Options for [`group_digits`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupFormat {
    /// The decimal is left-padded with zeros up to this many digits.
    pub min_digits: usize,
    /// Inserted between every group of three digits, counted from the right.
    pub separator: char,
}

impl GroupFormat {
    pub const fn with_min_digits(min_digits: usize) -> GroupFormat {
        GroupFormat {
            min_digits,
            separator: ',',
        }
    }
}

impl Default for GroupFormat {
    fn default() -> Self {
        GroupFormat::with_min_digits(1)
    }
}

/// Groups the digits of a decimal for display, padding it with zeros first.
///
/// # Examples
/// ```
/// # use minitype::formatter::{group_digits, GroupFormat};
/// assert_eq!(group_digits("1234567", &GroupFormat::default()), "1,234,567");
/// assert_eq!(group_digits("12", &GroupFormat::with_min_digits(4)), "0,012");
/// ```
pub fn group_digits(decimal: &str, format: &GroupFormat) -> String {
    let padding = format.min_digits.saturating_sub(decimal.len());
    let total = padding + decimal.len();
    let mut grouped = String::with_capacity(total + total / 3);

    let digits = std::iter::repeat_n('0', padding).chain(decimal.chars());
    for (index, ch) in digits.enumerate() {
        if index > 0 && (total - index) % 3 == 0 {
            grouped.push(format.separator);
        }
        grouped.push(ch);
    }
    grouped
}

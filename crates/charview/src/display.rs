// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Alignment, Write};

use crate::View;

/// Writes the contents of the view enclosed in `"` quote delimiters.
///
/// Field width, fill character and alignment from the format specification
/// are honored: when a width larger than the content is requested, the fill
/// is emitted between the quotes, before the content by default and after it
/// for left alignment. Each unit is written as the Unicode scalar of the same
/// value - there is no encoding awareness.
///
/// ```
/// use charview::sv;
///
/// assert_eq!(format!("{}", sv("abc")), "\"abc\"");
/// assert_eq!(format!("{:*>6}", sv("abc")), "\"***abc\"");
/// ```
impl fmt::Display for View<'_, u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let padding = f.width().map_or(0, |width| width.saturating_sub(self.len()));
        let fill = f.fill();
        let pad_after = matches!(f.align(), Some(Alignment::Left));

        f.write_char('"')?;

        if !pad_after {
            for _ in 0..padding {
                f.write_char(fill)?;
            }
        }

        for unit in self.iter() {
            f.write_char(char::from(unit))?;
        }

        if pad_after {
            for _ in 0..padding {
                f.write_char(fill)?;
            }
        }

        f.write_char('"')
    }
}

#[cfg(test)]
mod tests {
    use crate::{StrView, sv};

    #[test]
    fn writes_quoted_contents() {
        assert_eq!(format!("{}", sv("hello")), "\"hello\"");
        assert_eq!(format!("{}", StrView::new()), "\"\"");
    }

    #[test]
    fn pads_to_field_width_inside_quotes() {
        assert_eq!(format!("{:8}", sv("abc")), "\"     abc\"");
        assert_eq!(format!("{:*>8}", sv("abc")), "\"*****abc\"");
        assert_eq!(format!("{:*<8}", sv("abc")), "\"abc*****\"");
    }

    #[test]
    fn width_smaller_than_content_adds_no_padding() {
        assert_eq!(format!("{:2}", sv("abc")), "\"abc\"");
    }

    #[test]
    fn units_are_written_verbatim() {
        // No encoding awareness: each unit becomes the scalar of equal value.
        let backing = [0xFF_u8, b'x'];

        assert_eq!(format!("{}", StrView::from(&backing)), "\"\u{FF}x\"");
    }
}

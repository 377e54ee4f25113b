//! Sealed style table and per-format serialization records

use duke_styles_core::style::{FIRST_CUSTOM_ID, VERTICAL_TEXT};
use duke_styles_core::{Color, ColorModel, FormatDescriptor, ValidatedStyle};

use crate::registry::StyleHandle;

/// Styles of a sealed registry, ordered by handle id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalStyleTable {
    styles: Vec<ValidatedStyle>,
    generation: u32,
}

impl FinalStyleTable {
    pub(crate) fn new(styles: Vec<ValidatedStyle>, generation: u32) -> Self {
        Self { styles, generation }
    }

    /// Look up the style of a handle
    ///
    /// Returns `None` for handles issued by another registry session.
    pub fn get(&self, handle: StyleHandle) -> Option<&ValidatedStyle> {
        if handle.generation() != self.generation {
            return None;
        }
        self.styles.get(handle.id() as usize)
    }

    /// Number of styles
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the table holds no style
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Registry session the table was sealed in
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Styles in handle order
    pub fn styles(&self) -> &[ValidatedStyle] {
        &self.styles
    }

    /// Iterate over all styles with their handles
    pub fn iter(&self) -> impl Iterator<Item = (StyleHandle, &ValidatedStyle)> {
        let generation = self.generation;
        self.styles
            .iter()
            .enumerate()
            .map(move |(i, s)| (StyleHandle::new(i as u32, generation), s))
    }

    /// Serialization records for a format's style section, in handle order
    pub fn records<'a>(
        &'a self,
        format: &'a FormatDescriptor,
    ) -> impl Iterator<Item = XfRecord> + 'a {
        self.iter()
            .map(move |(handle, style)| XfRecord::new(handle, style, format))
    }

    /// Unwrap into the ordered styles
    pub fn into_styles(self) -> Vec<ValidatedStyle> {
        self.styles
    }
}

/// Cell format record with dialect-specific values
///
/// Rotation is in the format's rotation domain, and with an indexed color
/// model every color is a palette index (64 for automatic).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XfRecord {
    pub handle: StyleHandle,
    pub num_fmt_id: u16,
    /// Custom format code, `None` for builtin formats
    pub num_fmt_code: Option<String>,
    pub locked: bool,
    pub hidden: bool,
    pub quote_prefix: bool,
    pub horizontal: u8,
    pub vertical: u8,
    pub wrap_text: bool,
    pub shrink_to_fit: bool,
    pub indent: u16,
    pub rotation: i16,
    /// Left, right, top, bottom line codes
    pub border_styles: [u8; 4],
    /// Left, right, top, bottom colors
    pub border_colors: [Color; 4],
    pub fill_pattern: u8,
    pub fill_foreground: Color,
    pub fill_background: Color,
}

impl XfRecord {
    fn new(handle: StyleHandle, style: &ValidatedStyle, format: &FormatDescriptor) -> Self {
        let color = |c: Color| match format.color_model {
            ColorModel::Indexed => Color::Indexed(c.palette_index()),
            ColorModel::Rgb => c,
        };
        let border = &style.border;
        let num_fmt_code = if style.data_format >= FIRST_CUSTOM_ID {
            format.number_formats.code(style.data_format).map(str::to_string)
        } else {
            None
        };

        Self {
            handle,
            num_fmt_id: style.data_format,
            num_fmt_code,
            locked: style.protection.locked,
            hidden: style.protection.hidden,
            quote_prefix: style.quote_prefix,
            horizontal: style.alignment.horizontal.code(),
            vertical: style.alignment.vertical.code(),
            wrap_text: style.alignment.wrap_text,
            shrink_to_fit: style.alignment.shrink_to_fit,
            indent: style.alignment.indent,
            rotation: style.rotation().in_domain(format.rotation_domain),
            border_styles: [
                border.left.style.code(),
                border.right.style.code(),
                border.top.style.code(),
                border.bottom.style.code(),
            ],
            border_colors: [
                color(border.left.color),
                color(border.right.color),
                color(border.top.color),
                color(border.bottom.color),
            ],
            fill_pattern: style.fill.pattern.code(),
            fill_foreground: color(style.fill.foreground),
            fill_background: color(style.fill.background),
        }
    }

    /// Check whether the record holds vertical stacked text
    pub fn is_vertical_text(&self) -> bool {
        self.rotation == VERTICAL_TEXT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duke_styles_core::{normalize, ResolvedStyle};
    use pretty_assertions::assert_eq;

    fn table(styles: &[ResolvedStyle], format: &FormatDescriptor) -> FinalStyleTable {
        let styles = styles
            .iter()
            .map(|s| normalize(s, format).unwrap())
            .collect();
        FinalStyleTable::new(styles, 3)
    }

    #[test]
    fn test_get_checks_generation() {
        let t = table(&[ResolvedStyle::default()], &FormatDescriptor::xlsx());
        assert!(t.get(StyleHandle::new(0, 3)).is_some());
        assert!(t.get(StyleHandle::new(0, 2)).is_none());
        assert!(t.get(StyleHandle::new(1, 3)).is_none());
    }

    #[test]
    fn test_legacy_records() {
        let format = FormatDescriptor::xls();
        let t = table(
            &[ResolvedStyle::default()
                .rotation(135)
                .fill_color(Color::rgb(0, 0, 128))],
            &format,
        );
        let record = t.records(&format).next().unwrap();
        assert_eq!(record.rotation, -45);
        assert_eq!(record.fill_foreground, Color::Indexed(18));
        assert_eq!(record.fill_background, Color::Indexed(64));
        assert_eq!(record.border_colors, [Color::Indexed(64); 4]);
        assert!(record.locked);
    }

    #[test]
    fn test_modern_records_keep_rgb() {
        let format = FormatDescriptor::xlsx();
        let t = table(
            &[ResolvedStyle::default()
                .rotation(135)
                .fill_color(Color::rgb(0, 0, 128))],
            &format,
        );
        let record = t.records(&format).next().unwrap();
        assert_eq!(record.rotation, 135);
        assert_eq!(record.fill_foreground, Color::rgb(0, 0, 128));
        assert_eq!(record.fill_background, Color::Auto);
    }

    #[test]
    fn test_custom_number_format_code() {
        let format = FormatDescriptor::xlsx()
            .with_custom_format(164, "0.000")
            .unwrap();
        let t = table(
            &[
                ResolvedStyle::default().data_format(14),
                ResolvedStyle::default().data_format(164),
            ],
            &format,
        );
        let records: Vec<_> = t.records(&format).collect();
        assert_eq!(records[0].num_fmt_id, 14);
        assert_eq!(records[0].num_fmt_code, None);
        assert_eq!(records[1].num_fmt_code.as_deref(), Some("0.000"));
        assert_eq!(records[1].handle.id(), 1);
    }

    #[test]
    fn test_vertical_text_record() {
        let format = FormatDescriptor::xls();
        let t = table(&[ResolvedStyle::default().rotation(255)], &format);
        let record = t.records(&format).next().unwrap();
        assert_eq!(record.rotation, 255);
        assert!(record.is_vertical_text());
    }
}

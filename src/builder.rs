//! Fluent builders for documents, tables, cells, and property strings.
//!
//! Builders are plain values: every method takes the builder by value and
//! returns it, so there is no shared state to guard. `build` hands back the
//! finished piece.

use crate::{
    Alignment, Cell, Config, Document, Footer, FormField, FormFieldKind, Image, PageSize, Row,
    Table,
};

/// Builds a [`Document`] step by step.
#[derive(Clone, Debug, Default)]
pub struct DocumentBuilder {
    doc: Document,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.doc.config = config;
        self
    }

    /// Sets the document title.
    pub fn title(mut self, props: impl Into<String>, text: impl Into<String>) -> Self {
        self.doc.title.props = props.into();
        self.doc.title.text = text.into();
        self
    }

    /// Lays the title out as a table.
    pub fn title_table(mut self, table: Table) -> Self {
        self.doc.title.table = Some(Box::new(table));
        self
    }

    /// Appends a table to the document body.
    pub fn table(mut self, table: Table) -> Self {
        self.doc.tables.push(table);
        self
    }

    /// Appends an image.
    pub fn image(mut self, image: Image) -> Self {
        self.doc.images.push(image);
        self
    }

    /// Sets the footer line.
    pub fn footer(mut self, font: impl Into<String>, text: impl Into<String>) -> Self {
        self.doc.footer = Footer {
            font: font.into(),
            text: text.into(),
        };
        self
    }

    pub fn build(self) -> Document {
        self.doc
    }
}

/// Builds a [`Table`].
#[derive(Clone, Debug, Default)]
pub struct TableBuilder {
    table: Table,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the column count and relative widths.
    pub fn columns(mut self, max_columns: u32, widths: impl Into<Vec<f64>>) -> Self {
        self.table.max_columns = max_columns;
        self.table.column_widths = widths.into();
        self
    }

    /// Appends a row of cells.
    pub fn row(mut self, cells: impl IntoIterator<Item = Cell>) -> Self {
        self.table.rows.push(Row {
            height: None,
            cells: cells.into_iter().collect(),
        });
        self
    }

    /// Appends a row with an explicit height.
    pub fn row_with_height(mut self, height: u32, cells: impl IntoIterator<Item = Cell>) -> Self {
        self.table.rows.push(Row {
            height: Some(height),
            cells: cells.into_iter().collect(),
        });
        self
    }

    pub fn build(self) -> Table {
        self.table
    }
}

/// Builds a single [`Cell`].
#[derive(Clone, Debug, Default)]
pub struct CellBuilder {
    cell: Cell,
}

impl CellBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn props(mut self, props: impl Into<String>) -> Self {
        self.cell.props = props.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.cell.text = text.into();
        self
    }

    /// Attaches a text form field.
    pub fn text_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cell.form_field = Some(FormField {
            kind: FormFieldKind::Text,
            name: name.into(),
            value: value.into(),
            ..FormField::default()
        });
        self
    }

    /// Attaches a checkbox form field.
    pub fn checkbox(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        checked: bool,
    ) -> Self {
        self.cell.form_field = Some(FormField {
            kind: FormFieldKind::Checkbox,
            name: name.into(),
            value: value.into(),
            checked,
            ..FormField::default()
        });
        self
    }

    /// Attaches a radio-button form field.
    pub fn radio(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        group_name: impl Into<String>,
        checked: bool,
    ) -> Self {
        self.cell.form_field = Some(FormField {
            kind: FormFieldKind::Radio,
            name: name.into(),
            value: value.into(),
            checked,
            group_name: Some(group_name.into()),
            shape: Some("round".to_owned()),
        });
        self
    }

    pub fn build(self) -> Cell {
        self.cell
    }
}

/// Creates a plain cell with props and text.
pub fn cell(props: impl Into<String>, text: impl Into<String>) -> Cell {
    Cell {
        props: props.into(),
        text: text.into(),
        form_field: None,
    }
}

/// Creates a cell carrying a text form field.
pub fn text_field_cell(
    props: impl Into<String>,
    text: impl Into<String>,
    name: impl Into<String>,
    value: impl Into<String>,
) -> Cell {
    CellBuilder::new()
        .props(props)
        .text(text)
        .text_field(name, value)
        .build()
}

/// Creates a cell carrying a checkbox form field.
pub fn checkbox_cell(
    props: impl Into<String>,
    name: impl Into<String>,
    value: impl Into<String>,
    checked: bool,
) -> Cell {
    CellBuilder::new().props(props).checkbox(name, value, checked).build()
}

/// Creates a cell carrying a radio-button form field.
pub fn radio_cell(
    props: impl Into<String>,
    name: impl Into<String>,
    value: impl Into<String>,
    group_name: impl Into<String>,
    checked: bool,
) -> Cell {
    CellBuilder::new()
        .props(props)
        .radio(name, value, group_name, checked)
        .build()
}

/// Builds a page [`Config`] with sensible defaults (A4, thin borders,
/// alignment 1).
#[derive(Clone, Debug)]
pub struct ConfigBuilder {
    config: Config,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            config: Config {
                page: PageSize::A4.as_str().to_owned(),
                page_border: "1:1:1:1".to_owned(),
                page_alignment: 1,
                watermark: String::new(),
            },
        }
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: PageSize) -> Self {
        self.config.page = page.as_str().to_owned();
        self
    }

    /// Sets the page border widths in `top:right:bottom:left` order.
    pub fn page_border(mut self, top: u32, right: u32, bottom: u32, left: u32) -> Self {
        self.config.page_border = format!("{top}:{right}:{bottom}:{left}");
        self
    }

    pub fn page_alignment(mut self, alignment: i32) -> Self {
        self.config.page_alignment = alignment;
        self
    }

    pub fn watermark(mut self, watermark: impl Into<String>) -> Self {
        self.config.watermark = watermark.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

/// Builds a cell property string in the service's
/// `font:size:weight:alignment:top:right:bottom:left` form.
///
/// Weight digits encode bold/italic flags: `000` normal, `100` bold, `010`
/// italic, `110` both.
#[derive(Clone, Debug)]
pub struct PropsBuilder {
    font: String,
    size: u32,
    weight: &'static str,
    alignment: Alignment,
    borders: [u32; 4],
}

impl Default for PropsBuilder {
    fn default() -> Self {
        Self {
            font: "font1".to_owned(),
            size: 9,
            weight: "000",
            alignment: Alignment::Left,
            borders: [1, 1, 1, 1],
        }
    }
}

impl PropsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn bold(mut self) -> Self {
        self.weight = "100";
        self
    }

    pub fn italic(mut self) -> Self {
        self.weight = "010";
        self
    }

    pub fn bold_italic(mut self) -> Self {
        self.weight = "110";
        self
    }

    pub fn normal(mut self) -> Self {
        self.weight = "000";
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn left(self) -> Self {
        self.alignment(Alignment::Left)
    }

    pub fn center(self) -> Self {
        self.alignment(Alignment::Center)
    }

    pub fn right(self) -> Self {
        self.alignment(Alignment::Right)
    }

    pub fn borders(mut self, top: u32, right: u32, bottom: u32, left: u32) -> Self {
        self.borders = [top, right, bottom, left];
        self
    }

    pub fn no_borders(self) -> Self {
        self.borders(0, 0, 0, 0)
    }

    pub fn all_borders(self) -> Self {
        self.borders(1, 1, 1, 1)
    }

    pub fn build(self) -> String {
        format!(
            "{}:{}:{}:{}:{}:{}:{}:{}",
            self.font,
            self.size,
            self.weight,
            self.alignment.as_str(),
            self.borders[0],
            self.borders[1],
            self.borders[2],
            self.borders[3]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{cell, checkbox_cell, radio_cell, DocumentBuilder, PropsBuilder, TableBuilder};
    use crate::builder::ConfigBuilder;
    use crate::{FormFieldKind, PageSize};

    #[test]
    fn props_builder_default_string() {
        assert_eq!(PropsBuilder::new().build(), "font1:9:000:left:1:1:1:1");
    }

    #[test]
    fn props_builder_bold_centered_no_borders() {
        let props = PropsBuilder::new().size(16).bold().center().no_borders().build();
        assert_eq!(props, "font1:16:100:center:0:0:0:0");
    }

    #[test]
    fn config_builder_formats_border() {
        let config = ConfigBuilder::new()
            .page(PageSize::Letter)
            .page_border(0, 0, 0, 1)
            .build();
        assert_eq!(config.page, "Letter");
        assert_eq!(config.page_border, "0:0:0:1");
        assert_eq!(config.page_alignment, 1);
    }

    #[test]
    fn document_builder_accumulates_tables_in_order() {
        let first = TableBuilder::new()
            .columns(1, [1.0])
            .row([cell("p", "one")])
            .build();
        let second = TableBuilder::new()
            .columns(1, [1.0])
            .row_with_height(24, [cell("p", "two")])
            .build();

        let doc = DocumentBuilder::new()
            .title("font1:16:100:left:0:0:0:1", "Report")
            .table(first)
            .table(second)
            .footer("font1:7:000:center", "page 1")
            .build();

        assert_eq!(doc.title.text, "Report");
        assert_eq!(doc.tables.len(), 2);
        assert_eq!(doc.tables[1].rows[0].height, Some(24));
        assert_eq!(doc.footer.text, "page 1");
    }

    #[test]
    fn radio_cell_carries_group_and_shape() {
        let cell = radio_cell("p", "gender", "male", "gender_group", true);
        let field = cell.form_field.expect("must carry form field");
        assert_eq!(field.kind, FormFieldKind::Radio);
        assert_eq!(field.group_name.as_deref(), Some("gender_group"));
        assert_eq!(field.shape.as_deref(), Some("round"));
        assert!(field.checked);
    }

    #[test]
    fn checkbox_cell_keeps_text_empty() {
        let cell = checkbox_cell("p", "consent", "yes", false);
        assert_eq!(cell.text, "");
        let field = cell.form_field.expect("must carry form field");
        assert_eq!(field.kind, FormFieldKind::Checkbox);
        assert!(!field.checked);
    }
}

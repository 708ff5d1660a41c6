use serde::{Deserialize, Serialize};

/// Complete description of a renderable PDF document.
///
/// Field names follow the service's JSON contract; the client never
/// interprets them beyond encoding and decoding.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub config: Config,
    #[serde(default)]
    pub title: Title,
    #[serde(rename = "table", default)]
    pub tables: Vec<Table>,
    #[serde(rename = "image", default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub footer: Footer,
}

/// Page-level configuration settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "pageBorder", default)]
    pub page_border: String,
    #[serde(default)]
    pub page: String,
    #[serde(rename = "pageAlignment", default)]
    pub page_alignment: i32,
    #[serde(default)]
    pub watermark: String,
}

/// Document title, optionally laid out as a table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Title {
    #[serde(default)]
    pub props: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<Box<Table>>,
}

/// Table structure in the document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    #[serde(rename = "maxcolumns", default)]
    pub max_columns: u32,
    #[serde(rename = "columnwidths", default)]
    pub column_widths: Vec<f64>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

/// Row in a table. Cells sit under the wire key `row`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(rename = "row", default)]
    pub cells: Vec<Cell>,
}

/// Cell in a table row, optionally carrying an interactive form field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub props: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_field: Option<FormField>,
}

/// Interactive form field attached to a cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    #[serde(rename = "type")]
    pub kind: FormFieldKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
}

/// Kind discriminator of a [`FormField`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormFieldKind {
    #[default]
    Text,
    Checkbox,
    Radio,
}

/// Image placed on the page at absolute coordinates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

/// Document footer line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default)]
    pub font: String,
    #[serde(default)]
    pub text: String,
}

/// Common page sizes understood by the rendering service.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PageSize {
    A4,
    Letter,
    Legal,
}

impl PageSize {
    /// Canonical wire form, e.g. `"A4"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A4 => "A4",
            Self::Letter => "Letter",
            Self::Legal => "Legal",
        }
    }
}

/// Text alignment options.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Canonical wire form, e.g. `"left"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

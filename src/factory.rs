//! Canned document layouts: typed presets and a form scaffolding builder.

use crate::builder::{cell, checkbox_cell, radio_cell, text_field_cell, PropsBuilder};
use crate::{Config, ConfigBuilder, Document, DocumentBuilder, TableBuilder};

/// Kind of document a factory preset produces.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DocumentType {
    Form,
    Report,
    Invoice,
    Custom,
}

/// Radio-button choice inside a form group.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RadioOption {
    pub label: String,
    pub value: String,
    pub checked: bool,
}

/// Checkbox choice inside a form row.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckboxOption {
    pub name: String,
    pub label: String,
    pub value: String,
    pub checked: bool,
}

/// Creates document builders pre-seeded with a shared configuration.
#[derive(Clone, Debug)]
pub struct DocumentFactory {
    default_config: Config,
}

impl Default for DocumentFactory {
    fn default() -> Self {
        Self {
            default_config: ConfigBuilder::new().build(),
        }
    }
}

impl DocumentFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration applied to every created document.
    pub fn with_default_config(mut self, config: Config) -> Self {
        self.default_config = config;
        self
    }

    /// Starts a document builder with the preset footer for `doc_type`.
    pub fn document(&self, doc_type: DocumentType) -> DocumentBuilder {
        let builder = DocumentBuilder::new().config(self.default_config.clone());
        match doc_type {
            DocumentType::Form => builder.footer("font1:7:000:center", ""),
            DocumentType::Report => builder.footer("font1:8:000:center", ""),
            DocumentType::Invoice => builder.footer("font1:7:000:right", ""),
            DocumentType::Custom => builder,
        }
    }

    /// Starts a form builder seeded with this factory's configuration.
    pub fn form(&self) -> FormBuilder {
        FormBuilder::with_config(self.default_config.clone())
    }
}

/// Specialized builder for labelled form documents: section headers, field
/// rows, checkbox rows, and radio groups.
#[derive(Clone, Debug)]
pub struct FormBuilder {
    doc: DocumentBuilder,
    config: Config,
}

impl Default for FormBuilder {
    fn default() -> Self {
        Self::with_config(ConfigBuilder::new().build())
    }
}

impl FormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            doc: DocumentBuilder::new(),
            config,
        }
    }

    /// Sets the form title.
    pub fn title(mut self, text: impl Into<String>) -> Self {
        let props = PropsBuilder::new()
            .size(16)
            .bold()
            .left()
            .borders(0, 0, 0, 1)
            .build();
        self.doc = self.doc.title(props, text);
        self
    }

    /// Adds a section header spanning the full width.
    pub fn section(mut self, heading: impl Into<String>) -> Self {
        let props = PropsBuilder::new().size(10).bold().left().all_borders().build();
        let table = TableBuilder::new()
            .columns(1, [1.0])
            .row([cell(props, heading)])
            .build();
        self.doc = self.doc.table(table);
        self
    }

    /// Adds a labelled text-field row.
    pub fn text_field(
        mut self,
        label: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let value = value.into();
        let table = TableBuilder::new()
            .columns(2, [1.0, 3.0])
            .row([
                cell(Self::label_props(), label),
                text_field_cell(Self::value_props(), value.clone(), name, value),
            ])
            .build();
        self.doc = self.doc.table(table);
        self
    }

    /// Adds two labelled text fields side by side.
    pub fn two_column_text_field(
        mut self,
        label1: impl Into<String>,
        name1: impl Into<String>,
        value1: impl Into<String>,
        label2: impl Into<String>,
        name2: impl Into<String>,
        value2: impl Into<String>,
    ) -> Self {
        let value1 = value1.into();
        let value2 = value2.into();
        let table = TableBuilder::new()
            .columns(4, [1.0, 2.0, 1.0, 2.0])
            .row([
                cell(Self::label_props(), label1),
                text_field_cell(Self::value_props(), value1.clone(), name1, value1),
                cell(Self::label_props(), label2),
                text_field_cell(Self::value_props(), value2.clone(), name2, value2),
            ])
            .build();
        self.doc = self.doc.table(table);
        self
    }

    /// Adds a labelled row of checkboxes, one cell pair per option.
    pub fn checkbox_row(mut self, label: impl Into<String>, options: &[CheckboxOption]) -> Self {
        let checkbox_props = PropsBuilder::new().size(8).center().all_borders().build();
        let option_label_props = PropsBuilder::new().size(8).left().all_borders().build();

        let mut cells = vec![cell(Self::label_props(), label)];
        let mut widths = vec![2.0];
        for option in options {
            cells.push(checkbox_cell(
                checkbox_props.clone(),
                option.name.clone(),
                option.value.clone(),
                option.checked,
            ));
            cells.push(cell(option_label_props.clone(), option.label.clone()));
            widths.push(0.5);
            widths.push(1.5);
        }

        let table = TableBuilder::new()
            .columns(cells.len() as u32, widths)
            .row(cells)
            .build();
        self.doc = self.doc.table(table);
        self
    }

    /// Adds a labelled radio group; all options share `group_name`.
    pub fn radio_group(
        mut self,
        label: impl Into<String>,
        group_name: impl Into<String>,
        options: &[RadioOption],
    ) -> Self {
        let group_name = group_name.into();
        let radio_props = PropsBuilder::new().center().all_borders().build();
        let option_label_props = PropsBuilder::new().size(8).left().all_borders().build();

        let mut cells = vec![cell(Self::label_props(), label)];
        let mut widths = vec![2.0];
        for option in options {
            cells.push(radio_cell(
                radio_props.clone(),
                group_name.clone(),
                option.value.clone(),
                group_name.clone(),
                option.checked,
            ));
            cells.push(cell(option_label_props.clone(), option.label.clone()));
            widths.push(0.5);
            widths.push(1.5);
        }

        let table = TableBuilder::new()
            .columns(cells.len() as u32, widths)
            .row(cells)
            .build();
        self.doc = self.doc.table(table);
        self
    }

    /// Sets the form footer.
    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.doc = self.doc.footer("font1:7:000:center", text);
        self
    }

    /// Applies the configuration and constructs the final document.
    pub fn build(self) -> Document {
        self.doc.config(self.config).build()
    }

    fn label_props() -> String {
        PropsBuilder::new().bold().left().all_borders().build()
    }

    fn value_props() -> String {
        PropsBuilder::new().normal().left().all_borders().build()
    }
}

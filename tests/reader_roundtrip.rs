use std::io::Write;

use pdfsuit_http::{Document, FormFieldKind, PdfSuitError};

const WIRE_FIXTURE: &str = r#"{
  "config": {"pageBorder": "1:1:1:1", "page": "A4", "pageAlignment": 1, "watermark": "DRAFT"},
  "title": {"props": "font1:16:100:left:0:0:0:1", "text": "PATIENT REGISTRATION FORM"},
  "table": [
    {
      "maxcolumns": 2,
      "columnwidths": [1.0, 3.0],
      "rows": [
        {
          "row": [
            {"props": "font1:9:100:left:1:1:1:1", "text": "First Name:"},
            {
              "props": "font1:9:000:left:1:1:1:1",
              "text": "Michael",
              "form_field": {"type": "text", "name": "first_name", "value": "Michael"}
            }
          ]
        },
        {
          "height": 24,
          "row": [
            {
              "props": "font1:9:000:center:1:1:1:1",
              "text": "",
              "form_field": {
                "type": "radio",
                "name": "gender",
                "value": "male",
                "checked": true,
                "group_name": "gender",
                "shape": "round"
              }
            }
          ]
        }
      ]
    }
  ],
  "image": [{"path": "logo.png", "x": 10.0, "y": 20.0, "width": 100.0, "height": 40.0}],
  "footer": {"font": "font1:7:000:center", "text": "page 1"}
}"#;

#[tokio::test]
async fn missing_file_maps_to_file_not_found() {
    let dir = tempfile::tempdir().expect("must create temp dir");
    let path = dir.path().join("missing.json");

    let err = Document::from_json_file(&path)
        .await
        .expect_err("must fail");

    match err {
        PdfSuitError::FileNotFound(reported) => {
            assert!(reported.ends_with("missing.json"), "reported {reported}");
        }
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_file_maps_to_invalid_json() {
    let mut file = tempfile::NamedTempFile::new().expect("must create temp file");
    file.write_all(b"{not json").expect("must write");

    let err = Document::from_json_file(file.path())
        .await
        .expect_err("must fail");

    assert!(matches!(err, PdfSuitError::InvalidJson(_)));
}

#[tokio::test]
async fn wire_fixture_decodes_to_typed_document() {
    let mut file = tempfile::NamedTempFile::new().expect("must create temp file");
    file.write_all(WIRE_FIXTURE.as_bytes()).expect("must write");

    let doc = Document::from_json_file(file.path())
        .await
        .expect("fixture must decode");

    assert_eq!(doc.config.page, "A4");
    assert_eq!(doc.config.watermark, "DRAFT");
    assert_eq!(doc.title.text, "PATIENT REGISTRATION FORM");
    assert_eq!(doc.tables.len(), 1);

    let table = &doc.tables[0];
    assert_eq!(table.max_columns, 2);
    assert_eq!(table.column_widths, vec![1.0, 3.0]);
    assert_eq!(table.rows[0].height, None);
    assert_eq!(table.rows[1].height, Some(24));

    let text_field = table.rows[0].cells[1]
        .form_field
        .as_ref()
        .expect("text field present");
    assert_eq!(text_field.kind, FormFieldKind::Text);
    assert_eq!(text_field.name, "first_name");

    let radio = table.rows[1].cells[0]
        .form_field
        .as_ref()
        .expect("radio field present");
    assert_eq!(radio.kind, FormFieldKind::Radio);
    assert!(radio.checked);
    assert_eq!(radio.group_name.as_deref(), Some("gender"));
    assert_eq!(radio.shape.as_deref(), Some("round"));

    assert_eq!(doc.images[0].path, "logo.png");
    assert_eq!(doc.images[0].width, 100.0);
    assert_eq!(doc.footer.text, "page 1");
}

#[test]
fn round_trip_preserves_wire_shape() {
    let doc = Document::from_json_slice(WIRE_FIXTURE.as_bytes()).expect("fixture must decode");
    let reencoded = serde_json::to_value(&doc).expect("must encode");
    let original: serde_json::Value =
        serde_json::from_str(WIRE_FIXTURE).expect("fixture must parse");

    assert_eq!(reencoded, original);
}

#[test]
fn empty_bytes_map_to_empty_document() {
    let err = Document::from_json_slice(&[]).expect_err("must fail");
    assert!(matches!(err, PdfSuitError::EmptyDocument));
}

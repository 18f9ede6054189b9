//
// dump.rs
// dicom-manager
//
// Renders a full textual dump of a dataset, including nested sequence items, for the read commands.
//

use std::fmt::Write;

use dicom::core::dictionary::DataDictionary;
use dicom::core::value::Value;
use dicom::core::{PrimitiveValue, Tag};
use dicom::dictionary_std::StandardDataDictionary;
use dicom::object::InMemDicomObject;

// Long values (UIDs are fine, pixel data is not) are previewed, not printed whole.
const MAX_PREVIEW: usize = 64;

/// Render every element of the dataset as one line each, in the form
/// `(GGGG,EEEE) VR Name: value`, recursing into sequence items with
/// indentation. The DICOM data model is acyclic, so plain recursion suffices.
pub fn render_dataset(obj: &InMemDicomObject<StandardDataDictionary>) -> String {
    let mut out = String::new();
    render_into(obj, 0, &mut out);
    out
}

fn render_into(obj: &InMemDicomObject<StandardDataDictionary>, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    for elem in obj.iter() {
        let tag = elem.header().tag;
        let vr = elem.header().vr;

        match elem.value() {
            Value::Primitive(value) => {
                let _ = writeln!(
                    out,
                    "{indent}({:04X},{:04X}) {} {}: {}",
                    tag.group(),
                    tag.element(),
                    vr,
                    tag_name(tag),
                    preview(value),
                );
            }
            Value::Sequence(seq) => {
                let _ = writeln!(
                    out,
                    "{indent}({:04X},{:04X}) {} {}: sequence of {} item(s)",
                    tag.group(),
                    tag.element(),
                    vr,
                    tag_name(tag),
                    seq.items().len(),
                );
                for (idx, item) in seq.items().iter().enumerate() {
                    let _ = writeln!(out, "{indent}  item {}:", idx + 1);
                    render_into(item, depth + 2, out);
                }
            }
            Value::PixelSequence(fragments) => {
                let _ = writeln!(
                    out,
                    "{indent}({:04X},{:04X}) {} {}: encapsulated pixel data, {} fragment(s)",
                    tag.group(),
                    tag.element(),
                    vr,
                    tag_name(tag),
                    fragments.fragments().len(),
                );
            }
        }
    }
}

fn preview(value: &PrimitiveValue) -> String {
    let text = value.to_str();
    if text.is_empty() {
        return format!("<{} bytes>", value.to_bytes().len());
    }
    if text.len() <= MAX_PREVIEW {
        text.into_owned()
    } else {
        // The cut must land on a char boundary; values may be non-ASCII.
        let cut = text
            .char_indices()
            .map(|(idx, _)| idx)
            .take_while(|idx| *idx <= MAX_PREVIEW)
            .last()
            .unwrap_or(0);
        format!("{}…", &text[..cut])
    }
}

fn tag_name(tag: Tag) -> String {
    StandardDataDictionary
        .by_tag(tag)
        .map(|entry| entry.alias.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

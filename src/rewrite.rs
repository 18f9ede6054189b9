//
// rewrite.rs
// dicom-manager
//
// Depth-first tag rewrite over an in-memory dataset, descending into nested sequence items.
//

use dicom::core::value::{DataSetSequence, Value};
use dicom::core::{DataElement, DataElementHeader, PrimitiveValue, Tag};
use dicom::dictionary_std::StandardDataDictionary;
use dicom::object::InMemDicomObject;

/// In-memory dataset as loaded by `dicom::object::open_file`.
pub type Dataset = InMemDicomObject<StandardDataDictionary>;

/// Overwrite every element matching `tag` with `new_value`, at any nesting
/// depth. SQ items are full datasets of their own, so the same tag may occur
/// several times across the tree; all occurrences are rewritten. The element's
/// VR is kept, only the value changes.
///
/// One call handles one tag; callers apply a modification map as one pass per
/// entry. Passes are idempotent and commute across distinct tags since each
/// pass only touches elements matching its own tag.
pub fn rewrite_tag(dataset: &mut Dataset, tag: Tag, new_value: &str) {
    // Headers are collected up front: elements are taken out and re-inserted
    // while rewriting, which cannot happen under an active iterator borrow.
    let headers: Vec<(DataElementHeader, bool)> = dataset
        .iter()
        .map(|elem| {
            (
                *elem.header(),
                matches!(elem.value(), Value::Sequence(_)),
            )
        })
        .collect();

    for (header, is_sequence) in headers {
        if is_sequence {
            let Ok(elem) = dataset.take_element(header.tag) else {
                continue;
            };
            if let Value::Sequence(seq) = elem.into_value() {
                let mut items: Vec<Dataset> = seq.into_items().into_iter().collect();
                for item in &mut items {
                    rewrite_tag(item, tag, new_value);
                }
                dataset.put(DataElement::new(
                    header.tag,
                    header.vr,
                    DataSetSequence::from(items),
                ));
            }
        } else if header.tag == tag {
            dataset.put(DataElement::new(
                header.tag,
                header.vr,
                PrimitiveValue::from(new_value),
            ));
        }
    }
}

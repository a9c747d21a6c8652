#[cfg(test)]
pub mod fixtures {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Builds a real PDF in memory with one page per entry in `page_texts`.
    pub fn pdf_with_pages(page_texts: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(page_texts.len());
        for text in page_texts {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![100.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().expect("content stream should encode"),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).expect("document should save to memory");
        bytes
    }

    /// Single-page PDF used by most extraction tests.
    pub fn sample_pdf_bytes() -> Vec<u8> {
        pdf_with_pages(&["Hello from Socrati!"])
    }

    /// One well-formed quiz question as loose JSON, numbered for assertions.
    pub fn quiz_question_value(index: usize) -> serde_json::Value {
        let number = index + 1;
        serde_json::json!({
            "question": format!("Question {} about the dialogue?", number),
            "options": [
                format!("Answer {}A", number),
                format!("Answer {}B", number),
                format!("Answer {}C", number),
                format!("Answer {}D", number),
            ],
            "correctAnswer": format!("Answer {}A", number),
        })
    }

    /// JSON array of `count` well-formed questions, as the model would emit.
    pub fn quiz_json(count: usize) -> String {
        let items: Vec<serde_json::Value> = (0..count).map(quiz_question_value).collect();
        serde_json::to_string(&items).expect("quiz fixture should serialize")
    }

    pub fn sample_dialogue_text() -> String {
        "Teacher: What do you notice about the leaf?\n\
         Student: Its veins branch like a river delta.\n\
         Teacher: And why might that shape matter?"
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_pdf_fixture_loads_back() {
        let bytes = sample_pdf_bytes();
        let document = lopdf::Document::load_mem(&bytes).expect("fixture should be a valid PDF");
        assert_eq!(document.get_pages().len(), 1);
    }

    #[test]
    fn test_pdf_fixture_page_count_matches() {
        let bytes = pdf_with_pages(&["one", "two", "three"]);
        let document = lopdf::Document::load_mem(&bytes).expect("fixture should be a valid PDF");
        assert_eq!(document.get_pages().len(), 3);
    }

    #[test]
    fn test_quiz_fixture_is_well_formed() {
        let parsed: Vec<serde_json::Value> =
            serde_json::from_str(&quiz_json(5)).expect("fixture should parse");
        assert_eq!(parsed.len(), 5);
        assert_eq!(parsed[0]["options"].as_array().map(|o| o.len()), Some(4));
        assert_eq!(parsed[2]["correctAnswer"], "Answer 3A");
    }

    #[test]
    fn test_dialogue_fixture_alternates_speakers() {
        let dialogue = sample_dialogue_text();
        assert!(dialogue.starts_with("Teacher:"));
        assert!(dialogue.contains("Student:"));
    }
}

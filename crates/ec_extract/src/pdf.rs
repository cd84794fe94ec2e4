use ec_core::{Error, Result};
use lopdf::Document;

/// Extract text from an in-memory PDF, page by page in document order.
///
/// Pages without extractable text (scans, image-only pages) are skipped.
/// Any parser failure aborts the whole extraction.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    let mut doc = Document::load_mem(bytes).map_err(|e| Error::Pdf(e.to_string()))?;
    if doc.is_encrypted() {
        // Owner-password-only files open with an empty user password.
        doc.decrypt("").map_err(|e| {
            tracing::debug!(error = %e, "empty user password rejected");
            Error::Pdf("document is password protected".to_string())
        })?;
    }

    let pages = doc.get_pages();
    let mut text_content = Vec::with_capacity(pages.len());
    for page_num in pages.keys() {
        let text = doc
            .extract_text(&[*page_num])
            .map_err(|e| Error::Pdf(format!("page {}: {}", page_num, e)))?;
        let text = text.trim_end_matches(['\r', '\n']);
        if text.trim().is_empty() {
            tracing::debug!(page = page_num, "page has no extractable text, skipping");
            continue;
        }
        text_content.push(text.to_string());
    }

    tracing::debug!(
        pages = pages.len(),
        pages_with_text = text_content.len(),
        "parsed PDF"
    );
    Ok(text_content.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream, StringFormat};

    /// Builds a document with one page per entry; `None` produces a page with no text.
    fn build_document(pages: &[Option<&str>]) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for page in pages {
            let operations = match page {
                Some(text) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
                None => vec![],
            };
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    fn save(mut doc: Document) -> Vec<u8> {
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
        save(build_document(pages))
    }

    const PASSWORD_PAD: [u8; 32] = [
        0x28, 0xBF, 0x4E, 0x5E, 0x4E, 0x75, 0x8A, 0x41, 0x64, 0x00, 0x4E, 0x56, 0xFF, 0xFA, 0x01,
        0x08, 0x2E, 0x2E, 0x00, 0xB6, 0xD0, 0x68, 0x3E, 0x80, 0x2F, 0x0C, 0xA9, 0xFE, 0x64, 0x53,
        0x69, 0x7A,
    ];

    fn rc4(key: &[u8], data: &[u8]) -> Vec<u8> {
        let mut state: Vec<u8> = (0..=255).collect();
        let mut j = 0u8;
        for i in 0..256 {
            j = j.wrapping_add(state[i]).wrapping_add(key[i % key.len()]);
            state.swap(i, j as usize);
        }
        let (mut i, mut j) = (0u8, 0u8);
        data.iter()
            .map(|byte| {
                i = i.wrapping_add(1);
                j = j.wrapping_add(state[i as usize]);
                state.swap(i as usize, j as usize);
                let k = state[state[i as usize].wrapping_add(state[j as usize]) as usize];
                byte ^ k
            })
            .collect()
    }

    /// Applies 40-bit RC4 (standard security handler, revision 2) with the
    /// given user password to every stream in `doc`.
    fn encrypt(mut doc: Document, user_password: &[u8]) -> Vec<u8> {
        let file_id = b"ec-extract-test-id".to_vec();
        let owner_hash = vec![0x4f; 32];
        let permissions: i64 = -4;

        let mut seed = user_password.to_vec();
        seed.extend_from_slice(&PASSWORD_PAD[..32 - user_password.len()]);
        seed.extend_from_slice(&owner_hash);
        seed.extend_from_slice(&(permissions as u32).to_le_bytes());
        seed.extend_from_slice(&file_id);
        let file_key = md5::compute(&seed)[..5].to_vec();

        for (&(number, generation), object) in doc.objects.iter_mut() {
            if let Object::Stream(stream) = object {
                let mut object_seed = file_key.clone();
                object_seed.extend_from_slice(&number.to_le_bytes()[..3]);
                object_seed.extend_from_slice(&generation.to_le_bytes()[..2]);
                let object_key = &md5::compute(&object_seed)[..10];
                let encrypted = rc4(object_key, &stream.content);
                stream.set_content(encrypted);
            }
        }

        let encrypt_id = doc.add_object(dictionary! {
            "Filter" => "Standard",
            "V" => 1,
            "R" => 2,
            "O" => Object::String(owner_hash, StringFormat::Hexadecimal),
            "U" => Object::String(rc4(&file_key, &PASSWORD_PAD), StringFormat::Hexadecimal),
            "P" => permissions,
        });
        doc.trailer.set("Encrypt", encrypt_id);
        doc.trailer.set(
            "ID",
            vec![
                Object::String(file_id.clone(), StringFormat::Hexadecimal),
                Object::String(file_id, StringFormat::Hexadecimal),
            ],
        );
        save(doc)
    }

    #[test]
    fn test_pages_joined_in_order() {
        let bytes = build_pdf(&[
            Some("Revenue grew 10% this quarter"),
            Some("Margins were stable"),
            Some("Capex guidance unchanged"),
        ]);
        let text = extract_pdf_text(&bytes).unwrap();

        let first = text.find("Revenue grew 10% this quarter").unwrap();
        let second = text.find("Margins were stable").unwrap();
        let third = text.find("Capex guidance unchanged").unwrap();
        assert!(first < second && second < third);
        assert_eq!(text.lines().filter(|l| !l.trim().is_empty()).count(), 3);
    }

    #[test]
    fn test_pages_without_text_are_skipped() {
        let bytes = build_pdf(&[None, Some("Opening remarks"), None, Some("Q&A session")]);
        let text = extract_pdf_text(&bytes).unwrap();
        assert!(text.starts_with("Opening remarks"));
        assert!(text.ends_with("Q&A session"));
        assert!(!text.contains("\n\n"));
    }

    #[test]
    fn test_image_only_document_yields_empty_text() {
        let bytes = build_pdf(&[None, None]);
        assert_eq!(extract_pdf_text(&bytes).unwrap(), "");
    }

    #[test]
    fn test_corrupt_pdf_is_an_error() {
        let err = extract_pdf_text(b"%PDF-1.4\nthis is not really a pdf").unwrap_err();
        assert!(matches!(err, Error::Pdf(_)));
        assert!(err.to_string().starts_with("Failed to parse PDF: "));

        assert!(matches!(extract_pdf_text(b""), Err(Error::Pdf(_))));
    }

    #[test]
    fn test_owner_password_only_pdf_is_decrypted() {
        let doc = build_document(&[Some("Revenue grew 10% this quarter"), Some("Capex flat")]);
        let bytes = encrypt(doc, b"");
        assert!(Document::load_mem(&bytes).unwrap().is_encrypted());

        let text = extract_pdf_text(&bytes).unwrap();
        let first = text.find("Revenue grew 10% this quarter").unwrap();
        let second = text.find("Capex flat").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_user_password_pdf_is_rejected() {
        let doc = build_document(&[Some("Confidential guidance")]);
        let bytes = encrypt(doc, b"secret");

        let err = extract_pdf_text(&bytes).unwrap_err();
        assert!(matches!(err, Error::Pdf(_)));
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Failed to parse PDF: document is password protected");
    }
}

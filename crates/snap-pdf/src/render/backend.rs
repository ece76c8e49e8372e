//! lopdf document backend
//!
//! Builds the page tree by hand: one page per image, each page holding a
//! single DCT-encoded image XObject painted through a `cm` transform.

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use super::{DocumentBackend, EncodedImage, Placement};
use crate::constants::{IMAGE_XOBJECT_NAME, PRODUCER};
use crate::types::{PageSize, Result, SnapError};

struct OpenDocument {
    doc: Document,
    pages_id: ObjectId,
    kids: Vec<Object>,
    page_size: PageSize,
}

#[derive(Default)]
pub struct LopdfBackend {
    open: Option<OpenDocument>,
}

impl LopdfBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn open_document(&mut self) -> Result<&mut OpenDocument> {
        self.open
            .as_mut()
            .ok_or_else(|| SnapError::Config("Document has not been started".to_string()))
    }
}

impl DocumentBackend for LopdfBackend {
    fn begin_document(&mut self, page_size: PageSize) -> Result<()> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        self.open = Some(OpenDocument {
            doc,
            pages_id,
            kids: Vec::new(),
            page_size,
        });
        Ok(())
    }

    fn add_page(&mut self, image: &EncodedImage, placement: &Placement) -> Result<()> {
        let open = self.open_document()?;

        let image_id = open.doc.add_object(image_xobject(image));

        let mut xobjects = Dictionary::new();
        xobjects.set(IMAGE_XOBJECT_NAME, Object::Reference(image_id));
        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(xobjects));

        let content = format!(
            "q {} 0 0 {} {} {} cm /{} Do Q\n",
            placement.width, placement.height, placement.x, placement.y, IMAGE_XOBJECT_NAME
        );
        let content_id = open
            .doc
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(open.pages_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(open.page_size.width_pt),
                Object::Real(open.page_size.height_pt),
            ]),
        );
        page_dict.set("Resources", Object::Dictionary(resources));
        page_dict.set("Contents", Object::Reference(content_id));

        let page_id = open.doc.add_object(page_dict);
        open.kids.push(Object::Reference(page_id));
        Ok(())
    }

    fn save(&mut self, file_name: &str) -> Result<Vec<u8>> {
        let OpenDocument {
            mut doc,
            pages_id,
            kids,
            ..
        } = self
            .open
            .take()
            .ok_or_else(|| SnapError::Config("Document has not been started".to_string()))?;

        let page_count = kids.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(kids)),
            ("Count", Object::Integer(page_count)),
        ]);
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]));
        let info_id = doc.add_object(Dictionary::from_iter(vec![
            ("Title", Object::string_literal(file_name)),
            ("Producer", Object::string_literal(PRODUCER)),
        ]));

        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok(writer)
    }
}

/// Image XObject carrying the JPEG bytes untouched
fn image_xobject(image: &EncodedImage) -> Stream {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(image.width_px as i64));
    dict.set("Height", Object::Integer(image.height_px as i64));
    dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));

    // Already compressed; keep lopdf from flate-wrapping it
    Stream::new(dict, image.jpeg.clone()).with_compression(false)
}

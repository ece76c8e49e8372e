use image::{DynamicImage, ImageFormat, RgbImage};
use lopdf::Document;
use snap_pdf::*;
use std::io::Cursor;

fn png_item(name: &str, width: u32, height: u32) -> ImageItem {
    let pixels = RgbImage::from_pixel(width, height, image::Rgb([200, 40, 90]));
    let img = DynamicImage::ImageRgb8(pixels);
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    ImageItem::new(name, "image/png", bytes)
}

/// JPEG whose EXIF says "rotate 90° clockwise to display", as phones write
/// portrait shots taken with the sensor held sideways
fn sideways_jpeg_item(name: &str, width: u32, height: u32) -> ImageItem {
    let img = DynamicImage::ImageRgb8(RgbImage::new(width, height));
    let mut jpeg = Vec::new();
    img.write_to(&mut Cursor::new(&mut jpeg), ImageFormat::Jpeg)
        .unwrap();

    let mut exif = b"Exif\0\0".to_vec();
    // Little-endian TIFF header, first IFD at offset 8
    exif.extend_from_slice(&[0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00]);
    // One entry: Orientation (0x0112), SHORT, count 1, value 6
    exif.extend_from_slice(&[0x01, 0x00]);
    exif.extend_from_slice(&[0x12, 0x01, 0x03, 0x00, 0x01, 0x00, 0x00, 0x00]);
    exif.extend_from_slice(&[0x06, 0x00, 0x00, 0x00]);
    // No next IFD
    exif.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

    let segment_len = (exif.len() + 2) as u16;
    let mut bytes = jpeg[..2].to_vec();
    bytes.extend_from_slice(&[0xFF, 0xE1]);
    bytes.extend_from_slice(&segment_len.to_be_bytes());
    bytes.extend_from_slice(&exif);
    bytes.extend_from_slice(&jpeg[2..]);

    ImageItem::new(name, "image/jpeg", bytes)
}

fn broken_item(name: &str) -> ImageItem {
    ImageItem::new(name, "image/png", b"definitely not a png".to_vec())
}

/// Records backend calls instead of building a PDF
#[derive(Default)]
struct RecordingBackend {
    page_size: Option<PageSize>,
    pages: Vec<(u32, u32, Placement)>,
    saved_as: Option<String>,
}

impl DocumentBackend for RecordingBackend {
    fn begin_document(&mut self, page_size: PageSize) -> Result<()> {
        self.page_size = Some(page_size);
        Ok(())
    }

    fn add_page(&mut self, image: &EncodedImage, placement: &Placement) -> Result<()> {
        self.pages.push((image.width_px, image.height_px, *placement));
        Ok(())
    }

    fn save(&mut self, file_name: &str) -> Result<Vec<u8>> {
        self.saved_as = Some(file_name.to_string());
        Ok(Vec::new())
    }
}

/// Pixel width of the image drawn on each page, in page order
fn page_image_widths(doc: &Document) -> Vec<i64> {
    doc.get_pages()
        .values()
        .map(|page_id| {
            let page = doc.get_dictionary(*page_id).unwrap();
            let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
            let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
            let image_id = xobjects
                .get(IMAGE_XOBJECT_NAME.as_bytes())
                .unwrap()
                .as_reference()
                .unwrap();
            let stream = doc.get_object(image_id).unwrap().as_stream().unwrap();
            stream.dict.get(b"Width").unwrap().as_i64().unwrap()
        })
        .collect()
}

#[test]
fn test_empty_collection_touches_nothing() {
    let mut backend = RecordingBackend::default();
    let result = render_document(&mut backend, &[], &GenerateOptions::default(), |_, _| {});

    assert!(matches!(result, Err(SnapError::EmptyCollection)));
    assert!(backend.page_size.is_none());
    assert!(backend.saved_as.is_none());
}

#[test]
fn test_one_page_per_item_in_order() {
    let items = vec![
        png_item("a.png", 800, 600),
        png_item("b.png", 600, 800),
        png_item("c.png", 40, 40),
    ];
    let options = GenerateOptions {
        output_name: "trip".to_string(),
        ..Default::default()
    };

    let mut backend = RecordingBackend::default();
    let mut progress = Vec::new();
    render_document(&mut backend, &items, &options, |done, total| {
        progress.push((done, total))
    })
    .unwrap();

    let dims: Vec<(u32, u32)> = backend.pages.iter().map(|(w, h, _)| (*w, *h)).collect();
    assert_eq!(dims, vec![(800, 600), (600, 800), (40, 40)]);
    assert_eq!(progress, vec![(1, 3), (2, 3), (3, 3)]);
    assert_eq!(backend.saved_as.as_deref(), Some("trip.pdf"));
}

#[test]
fn test_pages_are_fit_and_centered() {
    let items = vec![png_item("a.png", 800, 600), png_item("b.png", 600, 800)];
    let options = GenerateOptions::default();
    let page = options.page_size();

    let mut backend = RecordingBackend::default();
    render_document(&mut backend, &items, &options, |_, _| {}).unwrap();

    assert_eq!(backend.page_size, Some(page));
    for (w, h, placement) in &backend.pages {
        let (w, h) = (*w as f32, *h as f32);
        let scale = (page.width_pt / w).min(page.height_pt / h);
        assert!((placement.scale - scale).abs() < 1e-4);
        assert!((placement.x - (page.width_pt - w * scale) / 2.0).abs() < 1e-3);
        assert!((placement.y - (page.height_pt - h * scale) / 2.0).abs() < 1e-3);
        assert!(placement.x >= 0.0 && placement.y >= 0.0);
    }
}

#[test]
fn test_decode_failure_aborts_without_saving() {
    let items = vec![png_item("ok.png", 10, 10), broken_item("bad.png")];

    let mut backend = RecordingBackend::default();
    let result = render_document(&mut backend, &items, &GenerateOptions::default(), |_, _| {});

    match result {
        Err(SnapError::Decode { name, .. }) => assert_eq!(name, "bad.png"),
        other => panic!("Expected Decode error, got {:?}", other.map(|b| b.len())),
    }
    assert!(backend.saved_as.is_none());
}

#[test]
fn test_exif_orientation_is_applied_before_placement() {
    let items = vec![sideways_jpeg_item("portrait.jpg", 40, 20)];
    let options = GenerateOptions::default();
    let page = options.page_size();

    let mut backend = RecordingBackend::default();
    render_document(&mut backend, &items, &options, |_, _| {}).unwrap();

    let (w, h, placement) = backend.pages[0];
    assert_eq!((w, h), (20, 40));
    // Upright portrait on a portrait page fills the height
    assert!((placement.height - page.height_pt).abs() < 1e-3);
}

#[test]
fn test_thumbnail_is_upright() {
    let item = sideways_jpeg_item("portrait.jpg", 40, 20);

    let thumb = decode_thumbnail(&item, 64).unwrap();

    assert!(thumb.height > thumb.width);
    assert_eq!(thumb.height, thumb.width * 2);
}

#[test]
fn test_invalid_output_name_is_rejected() {
    let items = vec![png_item("a.png", 10, 10)];
    let options = GenerateOptions {
        output_name: "  ".to_string(),
        ..Default::default()
    };

    let mut backend = RecordingBackend::default();
    let result = render_document(&mut backend, &items, &options, |_, _| {});
    assert!(matches!(result, Err(SnapError::Config(_))));
}

#[test]
fn test_lopdf_backend_produces_readable_pdf() {
    let items = vec![png_item("a.png", 800, 600), png_item("b.png", 600, 800)];
    let mut backend = LopdfBackend::new();

    let bytes = render_document(&mut backend, &items, &GenerateOptions::default(), |_, _| {})
        .unwrap();

    let doc = Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
    assert_eq!(page_image_widths(&doc), vec![800, 600]);
}

#[test]
fn test_lopdf_backend_requires_begin() {
    let mut backend = LopdfBackend::new();
    assert!(matches!(backend.save("x.pdf"), Err(SnapError::Config(_))));
}

#[tokio::test]
async fn test_generate_writes_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let items = vec![png_item("a.png", 800, 600), png_item("b.png", 600, 800)];
    let options = GenerateOptions {
        output_name: "trip".to_string(),
        quality: Quality::new(0.75),
        ..Default::default()
    };

    let path = generate_pdf(&items, &options, dir.path()).await.unwrap();

    assert_eq!(path, dir.path().join("trip.pdf"));
    let doc = Document::load(&path).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
    assert_eq!(page_image_widths(&doc), vec![800, 600]);

    // Only the final file remains
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn test_generate_empty_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let result = generate_pdf(&[], &GenerateOptions::default(), dir.path()).await;

    assert!(matches!(result, Err(SnapError::EmptyCollection)));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_generate_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let items = vec![png_item("a.png", 10, 10), broken_item("b.png")];

    let result = generate_pdf(&items, &GenerateOptions::default(), dir.path()).await;

    assert!(result.is_err());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_generate_uses_snapshot_of_collection() {
    let dir = tempfile::tempdir().unwrap();
    let mut collection: Collection = [png_item("a.png", 30, 10), png_item("b.png", 20, 10)]
        .into_iter()
        .collect();

    let snapshot = collection.snapshot();
    let options = GenerateOptions::default();
    let pending = generate_pdf(&snapshot, &options, dir.path());
    collection.move_to(0, 1);
    collection.remove_at(0);
    let path = pending.await.unwrap();

    let doc = Document::load(&path).unwrap();
    assert_eq!(page_image_widths(&doc), vec![30, 20]);
}

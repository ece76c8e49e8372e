use eframe::egui;
use snap_async_runtime::IngestedImage;
use snap_pdf::{
    Collection, GenerateOptions, ImageItem, PointerDrag, Quality, SnapError, TouchDrag,
};
use std::path::PathBuf;

/// A collection entry plus its uploaded preview
pub struct Thumbnail {
    /// Stable across reorders; used as the widget id
    pub id: u64,
    pub item: ImageItem,
    pub texture: Option<egui::TextureHandle>,
}

pub struct SnapState {
    pub collection: Collection<Thumbnail>,
    pub options: GenerateOptions,
    /// Raw slider position; `options.quality` holds the snapped value
    pub quality_slider: f32,
    pub output_dir: PathBuf,
    pub generating: bool,
    pub pointer: PointerDrag,
    pub touch: TouchDrag,
    pub show_log: bool,
    next_id: u64,
}

impl Default for SnapState {
    fn default() -> Self {
        let options = GenerateOptions::default();
        Self {
            quality_slider: options.quality.value(),
            options,
            collection: Collection::new(),
            output_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            generating: false,
            pointer: PointerDrag::new(),
            touch: TouchDrag::new(),
            show_log: false,
            next_id: 0,
        }
    }
}

impl SnapState {
    /// Append ingested images, uploading their thumbnails
    pub fn add_images(&mut self, ctx: &egui::Context, images: Vec<IngestedImage>) {
        let mut thumbnails = Vec::with_capacity(images.len());
        for IngestedImage { item, thumbnail } in images {
            let id = self.next_id;
            self.next_id += 1;

            let texture = thumbnail.map(|pixels| {
                let color_image = egui::ColorImage::from_rgba_unmultiplied(
                    [pixels.width, pixels.height],
                    &pixels.rgba,
                );
                ctx.load_texture(
                    format!("thumb_{id}"),
                    color_image,
                    egui::TextureOptions::LINEAR,
                )
            });
            thumbnails.push(Thumbnail { id, item, texture });
        }
        self.collection.add(thumbnails);
    }

    pub fn set_quality(&mut self, value: f32) {
        self.options.quality = Quality::new(value);
        self.quality_slider = self.options.quality.value();
    }

    pub fn apply_options(&mut self, options: GenerateOptions) {
        self.quality_slider = options.quality.value();
        self.options = options;
    }

    /// Frozen copy of the collection for generation
    pub fn images(&self) -> Vec<ImageItem> {
        self.collection.iter().map(|t| t.item.clone()).collect()
    }

    /// Why generation cannot start with the current inputs, if it cannot
    pub fn generate_blocker(&self) -> Option<String> {
        if self.collection.is_empty() {
            return Some(SnapError::EmptyCollection.to_string());
        }
        self.options.validate().err().map(|e| e.to_string())
    }

    /// Drop any gesture in progress, before the user edits the collection
    pub fn cancel_drag(&mut self) {
        self.pointer.cancel();
        self.touch.cancel();
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer.is_dragging() || self.touch.is_dragging()
    }
}

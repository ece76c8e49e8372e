use eframe::egui;

/// Builder for creating sliders with automatic change tracking
pub struct SliderBuilder<'a, T> {
    value: &'a mut T,
    range: std::ops::RangeInclusive<T>,
    text: String,
    step: Option<f64>,
    custom_formatter: Option<Box<dyn Fn(f64) -> String + 'a>>,
}

impl<'a, T> SliderBuilder<'a, T>
where
    T: egui::emath::Numeric,
{
    pub fn new(value: &'a mut T, range: std::ops::RangeInclusive<T>) -> Self {
        Self {
            value,
            range,
            text: String::new(),
            step: None,
            custom_formatter: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn formatter(mut self, formatter: impl Fn(f64) -> String + 'a) -> Self {
        self.custom_formatter = Some(Box::new(formatter));
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let mut slider =
            egui::Slider::new(self.value, self.range).clamping(egui::SliderClamping::Always);

        if !self.text.is_empty() {
            slider = slider.text(self.text);
        }

        if let Some(step) = self.step {
            slider = slider.step_by(step);
        }

        if let Some(formatter) = self.custom_formatter {
            slider = slider.custom_formatter(move |v, _| formatter(v));
        }

        ui.add(slider).changed()
    }
}

/// A labeled row with a text field
pub fn labeled_text(ui: &mut egui::Ui, label: &str, value: &mut String) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.text_edit_singleline(value).changed()
    })
    .inner
}

use serde::{Deserialize, Serialize};

use crate::get_data_location;

// Background theme driven by three color channel sliders in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            red: 0.196,
            green: 0.678,
            blue: 0.8,
        }
    }
}

impl Theme {
    pub fn set_red(&mut self, value: f64) {
        self.red = value.clamp(0.0, 1.0);
    }

    pub fn set_green(&mut self, value: f64) {
        self.green = value.clamp(0.0, 1.0);
    }

    pub fn set_blue(&mut self, value: f64) {
        self.blue = value.clamp(0.0, 1.0);
    }

    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            (self.red * 255.0).round() as u8,
            (self.green * 255.0).round() as u8,
            (self.blue * 255.0).round() as u8
        )
    }
}

pub fn theme_location() -> String {
    format!("{}/theme.json", get_data_location())
}

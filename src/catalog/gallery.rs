use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CardContent {
    Text {
        text: String,
    },
    Image {
        src: String,
        #[serde(default)]
        label: Option<String>,
    },
    Video {
        src: String,
        #[serde(default)]
        label: Option<String>,
    },
    Preview { url: String, label: String },
}

impl CardContent {
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Image { .. } => "image",
            Self::Video { .. } => "video",
            Self::Preview { .. } => "preview",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CardDescriptor {
    pub x_pct: f32,
    pub y_pct: f32,
    #[serde(default)]
    pub rotation_deg: f32,
    #[serde(flatten)]
    pub content: CardContent,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Slide {
    Image { src: String },
    Text { text: String },
}

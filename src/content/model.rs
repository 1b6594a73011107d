use crate::{
    content::photo::Photo,
    foundation::error::{ShalomError, ShalomResult},
    layout::model::LayoutModel,
};

/// Default card title, as shown when the editor opens.
pub const DEFAULT_CARD_TITLE: &str = "Feliz\ncumpleaños";
/// Default card message.
pub const DEFAULT_CARD_MESSAGE: &str =
    "Que Dios te acompañe y te bendiga, desde Shalom te deseamos un feliz cumpleaños 🎉";
/// Default flyer quote.
pub const DEFAULT_FLYER_QUOTE: &str = "\"Donde hay dos o tres reunidos en mi nombre, allí estoy yo en medio de ellos\" (Mateo 18,20)";
/// Default flyer date.
pub const DEFAULT_FLYER_DATE: &str = "SÁBADO 24";
/// Default flyer time.
pub const DEFAULT_FLYER_TIME: &str = "07:30 p.m.";
/// Default flyer location.
pub const DEFAULT_FLYER_LOCATION: &str = "Lugar: Parroquia Nuestra Sra de Lourdes";

/// Which composition is being edited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Birthday card.
    #[default]
    Card,
    /// Event flyer.
    Flyer,
}

impl Mode {
    /// Lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Card => "card",
            Mode::Flyer => "flyer",
        }
    }
}

/// Identifier of an editable text field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    /// Card title (multi-line).
    Title,
    /// Card message (multi-line).
    Message,
    /// Flyer quote (multi-line).
    Quote,
    /// Flyer date (single-line).
    Date,
    /// Flyer time (single-line).
    Time,
    /// Flyer location (multi-line).
    Location,
}

impl FieldId {
    /// Every field, card fields first.
    pub const ALL: [FieldId; 6] = [
        FieldId::Title,
        FieldId::Message,
        FieldId::Quote,
        FieldId::Date,
        FieldId::Time,
        FieldId::Location,
    ];

    /// Composition the field belongs to.
    pub fn mode(self) -> Mode {
        match self {
            FieldId::Title | FieldId::Message => Mode::Card,
            FieldId::Quote | FieldId::Date | FieldId::Time | FieldId::Location => Mode::Flyer,
        }
    }

    /// Whether the control accepts newlines.
    pub fn is_multiline(self) -> bool {
        !matches!(self, FieldId::Date | FieldId::Time)
    }

    /// Lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Title => "title",
            FieldId::Message => "message",
            FieldId::Quote => "quote",
            FieldId::Date => "date",
            FieldId::Time => "time",
            FieldId::Location => "location",
        }
    }
}

/// Card composition values.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CardContent {
    photo: Option<Photo>,
    title: String,
    message: String,
    template: String,
}

impl Default for CardContent {
    fn default() -> Self {
        Self {
            photo: None,
            title: DEFAULT_CARD_TITLE.to_string(),
            message: DEFAULT_CARD_MESSAGE.to_string(),
            template: crate::templates::catalog::CardTemplate::FIRST.id().to_string(),
        }
    }
}

impl CardContent {
    /// Current photo, if one was uploaded.
    pub fn photo(&self) -> Option<&Photo> {
        self.photo.as_ref()
    }

    /// Replace the photo (last write wins).
    pub fn set_photo(&mut self, photo: Option<Photo>) {
        self.photo = photo;
    }

    /// Title text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the title text verbatim.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Set the message text verbatim.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Selected card template id, as given (possibly unrecognised).
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Select a card template id. Unknown ids are accepted and render the minimal layout.
    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = template.into();
    }
}

/// Flyer composition values, including the per-template block layout.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FlyerContent {
    quote: String,
    date: String,
    time: String,
    location: String,
    template: String,
    layout: LayoutModel,
}

impl Default for FlyerContent {
    fn default() -> Self {
        Self {
            quote: DEFAULT_FLYER_QUOTE.to_string(),
            date: DEFAULT_FLYER_DATE.to_string(),
            time: DEFAULT_FLYER_TIME.to_string(),
            location: DEFAULT_FLYER_LOCATION.to_string(),
            template: crate::templates::catalog::FlyerTemplate::FIRST.id().to_string(),
            layout: LayoutModel::default(),
        }
    }
}

impl FlyerContent {
    /// Quote text.
    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// Set the quote text verbatim.
    pub fn set_quote(&mut self, quote: impl Into<String>) {
        self.quote = quote.into();
    }

    /// Date text.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Set the date text verbatim.
    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
    }

    /// Time text.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Set the time text verbatim.
    pub fn set_time(&mut self, time: impl Into<String>) {
        self.time = time.into();
    }

    /// Location text.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Set the location text verbatim.
    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    /// Selected flyer template id, as given (possibly unrecognised).
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Select a flyer template id. Overrides of other templates are left untouched.
    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = template.into();
    }

    /// Block layout overrides for every flyer template.
    pub fn layout(&self) -> &LayoutModel {
        &self.layout
    }

    /// Mutable access to the block layout, for the interactive layout surface.
    pub fn layout_mut(&mut self) -> &mut LayoutModel {
        &mut self.layout
    }
}

/// Read a text field from whichever composition owns it.
pub fn field_value<'a>(card: &'a CardContent, flyer: &'a FlyerContent, field: FieldId) -> &'a str {
    match field {
        FieldId::Title => card.title(),
        FieldId::Message => card.message(),
        FieldId::Quote => flyer.quote(),
        FieldId::Date => flyer.date(),
        FieldId::Time => flyer.time(),
        FieldId::Location => flyer.location(),
    }
}

/// Write a text field on whichever composition owns it.
pub fn set_field_value(
    card: &mut CardContent,
    flyer: &mut FlyerContent,
    field: FieldId,
    value: impl Into<String>,
) {
    match field {
        FieldId::Title => card.set_title(value),
        FieldId::Message => card.set_message(value),
        FieldId::Quote => flyer.set_quote(value),
        FieldId::Date => flyer.set_date(value),
        FieldId::Time => flyer.set_time(value),
        FieldId::Location => flyer.set_location(value),
    }
}

impl std::str::FromStr for Mode {
    type Err = ShalomError;

    fn from_str(s: &str) -> ShalomResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "card" => Ok(Mode::Card),
            "flyer" => Ok(Mode::Flyer),
            other => Err(ShalomError::validation(format!(
                "unknown composition mode '{other}' (expected 'card' or 'flyer')"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/model.rs"]
mod tests;

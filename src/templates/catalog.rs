/// Card skins. They differ only in decorative framing; every skin exposes the same fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardTemplate {
    /// Vintage frame with a polaroid photo.
    Classic,
    /// Rose background art with a rounded photo.
    Modern,
    /// Dark frame with gold dividers and an oval photo.
    Elegant,
}

/// Flyer skins. Each supplies default geometry for every block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlyerTemplate {
    /// Navy backdrop, gold circle and cross.
    Divine,
    /// Teal backdrop with a wave.
    Hope,
    /// Dark red backdrop with two flames.
    Fire,
}

impl CardTemplate {
    /// Enumeration order, which is also the carousel order.
    pub const ALL: [CardTemplate; 3] = [
        CardTemplate::Classic,
        CardTemplate::Modern,
        CardTemplate::Elegant,
    ];

    /// Template selected when the editor opens.
    pub const FIRST: CardTemplate = CardTemplate::Classic;

    /// Stable identifier.
    pub fn id(self) -> &'static str {
        match self {
            CardTemplate::Classic => "classic",
            CardTemplate::Modern => "modern",
            CardTemplate::Elegant => "elegant",
        }
    }

    /// Display name shown in the template navigator.
    pub fn name(self) -> &'static str {
        match self {
            CardTemplate::Classic => "Vintage",
            CardTemplate::Modern => "Floral",
            CardTemplate::Elegant => "Elegante",
        }
    }

    /// Preview glyph shown next to the name.
    pub fn preview(self) -> &'static str {
        match self {
            CardTemplate::Classic => "🎞️",
            CardTemplate::Modern => "🌹",
            CardTemplate::Elegant => "💎",
        }
    }

    /// Look up a template by id. Unknown ids return `None`; callers render the minimal layout.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

impl FlyerTemplate {
    /// Enumeration order, which is also the carousel order.
    pub const ALL: [FlyerTemplate; 3] = [
        FlyerTemplate::Divine,
        FlyerTemplate::Hope,
        FlyerTemplate::Fire,
    ];

    /// Template selected when the editor opens, and the fallback for unknown ids.
    pub const FIRST: FlyerTemplate = FlyerTemplate::Divine;

    /// Stable identifier.
    pub fn id(self) -> &'static str {
        match self {
            FlyerTemplate::Divine => "divine",
            FlyerTemplate::Hope => "hope",
            FlyerTemplate::Fire => "fire",
        }
    }

    /// Display name shown in the template navigator.
    pub fn name(self) -> &'static str {
        match self {
            FlyerTemplate::Divine => "Divino",
            FlyerTemplate::Hope => "Esperanza",
            FlyerTemplate::Fire => "Fuego",
        }
    }

    /// Preview glyph shown next to the name.
    pub fn preview(self) -> &'static str {
        match self {
            FlyerTemplate::Divine => "✝️",
            FlyerTemplate::Hope => "🌊",
            FlyerTemplate::Fire => "🔥",
        }
    }

    /// Exact lookup by id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    /// Lookup with fallback to [`FlyerTemplate::FIRST`].
    pub fn resolve(id: &str) -> Self {
        Self::from_id(id).unwrap_or(Self::FIRST)
    }
}

/// Carousel step for a list of template ids, wrapping at both ends.
///
/// An id that is not in the list steps to the first entry going forward and to the last going
/// backward.
pub(crate) fn cycle<'a>(ids: &[&'a str], current: &str, forward: bool) -> &'a str {
    let n = ids.len();
    if n == 0 {
        return "";
    }
    match ids.iter().position(|id| *id == current) {
        Some(i) if forward => ids[(i + 1) % n],
        Some(i) => ids[(i + n - 1) % n],
        None if forward => ids[0],
        None => ids[n - 1],
    }
}

/// Next/previous card template id in carousel order.
pub fn step_card_template(current: &str, forward: bool) -> &'static str {
    let ids = CardTemplate::ALL.map(CardTemplate::id);
    cycle(&ids, current, forward)
}

/// Next/previous flyer template id in carousel order.
pub fn step_flyer_template(current: &str, forward: bool) -> &'static str {
    let ids = FlyerTemplate::ALL.map(FlyerTemplate::id);
    cycle(&ids, current, forward)
}

#[cfg(test)]
#[path = "../../tests/unit/templates/catalog.rs"]
mod tests;

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Training {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub intensity: Option<String>,
    pub duration: Option<String>,
    pub group_size: Option<String>,
}

fn or_default<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value.as_deref().filter(|v| !v.is_empty()).unwrap_or(fallback)
}

impl Training {
    /// Public URL of the card image; images live under `/trainings/`.
    pub fn image_url(&self) -> String {
        let image = self.image.as_deref().unwrap_or_default();
        format!("/trainings/{}", image.trim_start_matches('/'))
    }

    pub fn description_text(&self) -> &str {
        or_default(&self.description, "")
    }

    pub fn category_label(&self) -> &str {
        or_default(&self.category, "Fitness")
    }

    pub fn duration_label(&self) -> &str {
        or_default(&self.duration, "60 min")
    }

    pub fn intensity_label(&self) -> &str {
        or_default(&self.intensity, "Medium Intensity")
    }

    pub fn group_size_label(&self) -> &str {
        or_default(&self.group_size, "Group Session")
    }
}

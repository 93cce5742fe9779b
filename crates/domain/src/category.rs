use std::{fmt, slice::Iter};

use crate::Name;

/// Muscle group a workout is classified under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    ChestBiceps,
    BackTriceps,
    LegsShoulders,
}

impl Category {
    pub fn iter() -> Iter<'static, Category> {
        static CATEGORIES: [Category; 3] = [
            Category::ChestBiceps,
            Category::BackTriceps,
            Category::LegsShoulders,
        ];
        CATEGORIES.iter()
    }

    /// Key used in persisted data.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Category::ChestBiceps => "CHEST_BICEPS",
            Category::BackTriceps => "BACK_TRICEPS",
            Category::LegsShoulders => "LEGS_SHOULDERS",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::ChestBiceps => "Грудь / Бицепс",
            Category::BackTriceps => "Спина / Трицепс",
            Category::LegsShoulders => "Ноги / Плечи",
        }
    }

    /// Built-in exercises in display order.
    #[must_use]
    pub fn template(self) -> &'static [&'static str] {
        match self {
            Category::ChestBiceps => &[
                "Жим лёжа на горизонтальной скамье",
                "Жим гантелей на наклонной скамье",
                "Сведения в тренажёре",
                "Подъём штанги на бицепс стоя",
            ],
            Category::BackTriceps => &[
                "Тяга верхнего блока к груди",
                "Тяга штанги в наклоне",
                "Тяга горизонтального блока",
                "Разгибания на трицепс в блоке",
            ],
            Category::LegsShoulders => &[
                "Приседания со штангой",
                "Жим ногами в тренажёре",
                "Выпады с гантелями",
                "Жим штанги стоя (армейский жим)",
            ],
        }
    }

    #[must_use]
    pub fn template_names(self) -> Vec<Name> {
        self.template()
            .iter()
            .copied()
            .map(Name::from_static)
            .collect()
    }

    #[must_use]
    pub fn is_template(self, name: &Name) -> bool {
        self.template().iter().any(|t| name == t)
    }
}

impl TryFrom<&str> for Category {
    type Error = CategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "CHEST_BICEPS" => Ok(Category::ChestBiceps),
            "BACK_TRICEPS" => Ok(Category::BackTriceps),
            "LEGS_SHOULDERS" => Ok(Category::LegsShoulders),
            _ => Err(CategoryError::Unknown(value.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CategoryError {
    #[error("unknown category {0:?}")]
    Unknown(String),
}

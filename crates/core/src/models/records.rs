//! Sub-records owned by the details step: partners, prizes and FAQs

use serde::{Deserialize, Serialize};

use crate::collection::{Record, RecordId};

/// A sponsoring or supporting organization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: RecordId,
    pub name: String,
    /// Logo URL
    pub logo: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartnerField {
    Name,
    Logo,
}

impl Partner {
    pub fn new(name: impl Into<String>, logo: impl Into<String>) -> Self {
        Self {
            id: RecordId::default(),
            name: name.into(),
            logo: logo.into(),
        }
    }
}

impl Record for Partner {
    type Field = PartnerField;
    const KIND: &'static str = "partner";
    const FIELDS: &'static [Self::Field] = &[PartnerField::Name, PartnerField::Logo];

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn field(&self, field: PartnerField) -> &str {
        match field {
            PartnerField::Name => &self.name,
            PartnerField::Logo => &self.logo,
        }
    }

    fn set_field(&mut self, field: PartnerField, value: String) {
        match field {
            PartnerField::Name => self.name = value,
            PartnerField::Logo => self.logo = value,
        }
    }
}

/// A prize track
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prize {
    pub id: RecordId,
    pub title: String,
    /// Free-form amount as entered ("$500", "Swag pack")
    pub amount: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrizeField {
    Title,
    Amount,
    Description,
}

impl Prize {
    pub fn new(
        title: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: RecordId::default(),
            title: title.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }
}

impl Record for Prize {
    type Field = PrizeField;
    const KIND: &'static str = "prize";
    const FIELDS: &'static [Self::Field] = &[PrizeField::Title, PrizeField::Amount, PrizeField::Description];

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn field(&self, field: PrizeField) -> &str {
        match field {
            PrizeField::Title => &self.title,
            PrizeField::Amount => &self.amount,
            PrizeField::Description => &self.description,
        }
    }

    fn set_field(&mut self, field: PrizeField, value: String) {
        match field {
            PrizeField::Title => self.title = value,
            PrizeField::Amount => self.amount = value,
            PrizeField::Description => self.description = value,
        }
    }
}

/// A frequently asked question
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub id: RecordId,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqField {
    Question,
    Answer,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: RecordId::default(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}

impl Record for Faq {
    type Field = FaqField;
    const KIND: &'static str = "faq";
    const FIELDS: &'static [Self::Field] = &[FaqField::Question, FaqField::Answer];

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn field(&self, field: FaqField) -> &str {
        match field {
            FaqField::Question => &self.question,
            FaqField::Answer => &self.answer,
        }
    }

    fn set_field(&mut self, field: FaqField, value: String) {
        match field {
            FaqField::Question => self.question = value,
            FaqField::Answer => self.answer = value,
        }
    }
}

impl std::str::FromStr for PartnerField {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(PartnerField::Name),
            "logo" => Ok(PartnerField::Logo),
            other => Err(crate::Error::Parse(format!("unknown partner field '{}'", other))),
        }
    }
}

impl std::str::FromStr for PrizeField {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(PrizeField::Title),
            "amount" => Ok(PrizeField::Amount),
            "description" => Ok(PrizeField::Description),
            other => Err(crate::Error::Parse(format!("unknown prize field '{}'", other))),
        }
    }
}

impl std::str::FromStr for FaqField {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "question" => Ok(FaqField::Question),
            "answer" => Ok(FaqField::Answer),
            other => Err(crate::Error::Parse(format!("unknown faq field '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_accessors_match_setters() {
        let mut prize = Prize::new("Gold", "$100", "");
        prize.set_field(PrizeField::Description, "Best hack".to_string());
        assert_eq!(prize.field(PrizeField::Description), "Best hack");
        assert_eq!(prize.field(PrizeField::Title), "Gold");
    }

    #[test]
    fn test_parse_field_names() {
        assert_eq!("logo".parse::<PartnerField>().unwrap(), PartnerField::Logo);
        assert_eq!("amount".parse::<PrizeField>().unwrap(), PrizeField::Amount);
        assert_eq!("answer".parse::<FaqField>().unwrap(), FaqField::Answer);
        assert!("colour".parse::<PartnerField>().is_err());
    }
}

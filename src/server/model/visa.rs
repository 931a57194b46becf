use crate::model::visa::{SaveVisaDto, VisaDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Visa {
    pub id: i32,
    pub country_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub processing_days: i32,
    pub price: i64,
    pub active: bool,
}

impl Visa {
    pub fn into_dto(self) -> VisaDto {
        VisaDto {
            id: self.id,
            country_id: self.country_id,
            title: self.title,
            description: self.description,
            processing_days: self.processing_days,
            price: self.price,
            active: self.active,
        }
    }

    pub fn from_entity(entity: entity::visa::Model) -> Self {
        Self {
            id: entity.id,
            country_id: entity.country_id,
            title: entity.title,
            description: entity.description,
            processing_days: entity.processing_days,
            price: entity.price,
            active: entity.active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveVisaParams {
    pub country_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub processing_days: i32,
    pub price: i64,
    pub active: bool,
}

impl SaveVisaParams {
    pub fn from_dto(dto: SaveVisaDto) -> Self {
        Self {
            country_id: dto.country_id,
            title: dto.title.trim().to_string(),
            description: dto.description,
            processing_days: dto.processing_days,
            price: dto.price,
            active: dto.active,
        }
    }
}

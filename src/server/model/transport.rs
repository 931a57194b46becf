use crate::model::transport::{SaveTransportTypeDto, TransportTypeDto};

/// Transport option applied to package and tour prices as a percentage multiplier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportType {
    pub id: i32,
    pub name: String,
    pub multiplier_percent: i32,
}

impl TransportType {
    pub fn into_dto(self) -> TransportTypeDto {
        TransportTypeDto {
            id: self.id,
            name: self.name,
            multiplier_percent: self.multiplier_percent,
        }
    }

    pub fn from_entity(entity: entity::transport_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            multiplier_percent: entity.multiplier_percent,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveTransportTypeParams {
    pub name: String,
    pub multiplier_percent: i32,
}

impl SaveTransportTypeParams {
    pub fn from_dto(dto: SaveTransportTypeDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            multiplier_percent: dto.multiplier_percent,
        }
    }
}

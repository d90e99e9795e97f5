use opsfabric_core::{Entity, VehicleId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Available,
    OnRoute,
    OutOfService,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub plate: String,
    pub capacity: u32,
    pub status: VehicleStatus,
}

impl Vehicle {
    pub fn new(plate: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: VehicleId::new(),
            plate: plate.into(),
            capacity,
            status: VehicleStatus::Available,
        }
    }
}

impl Entity for Vehicle {
    type Id = VehicleId;

    fn id(&self) -> VehicleId {
        self.id
    }
}

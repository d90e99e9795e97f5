//! The `inventory` service's observable shape: the snapshot the Order
//! Pipeline reads via and the signed reservation delta it writes back.

pub mod record;
pub mod reservation;

pub use record::InventoryRecord;
pub use reservation::ReservationDelta;

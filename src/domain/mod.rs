pub mod billing;
pub mod boarder;
pub mod booking;
pub mod common;
pub mod room;
pub mod staff;

pub use billing::{Charge, ChargeKind, DepositBalance, Payment, PaymentKind, PaymentMethod};
pub use boarder::{Boarder, Guardian};
pub use booking::{Booking, BookingStatus};
pub use room::{Room, RoomStatus};
pub use staff::{Caretaker, Employee, Owner};

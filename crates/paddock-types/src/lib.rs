//! Wire types shared by the paddock racing and sports services.
//!
//! Everything here crosses the HTTP boundary as JSON. The store crate
//! materialises [`Race`] and [`Event`] values from SQLite rows; the server
//! crate wraps them in the request / response envelopes defined alongside.

pub mod common;
pub mod racing;
pub mod sports;
pub mod timestamp;

pub use common::{Direction, ListOrder, Status};
pub use racing::{GetRaceResponse, ListRacesRequest, ListRacesRequestFilter, ListRacesResponse, Race};
pub use sports::{
    Event, GetEventResponse, ListEventsRequest, ListEventsRequestFilter, ListEventsResponse,
};
pub use timestamp::{Timestamp, TimestampError};

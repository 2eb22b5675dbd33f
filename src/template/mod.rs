//! Message template schemas.
//!
//! Pure data shapes for the richer message types the platform supports. The
//! client serializes these opaquely; it never interprets their contents.

mod airline;
mod buttons;
mod list;
mod media;
mod open_graph;

pub use airline::{
    AirlineBoardingPassTemplate, AirlineCheckInTemplate, AirlineItineraryTemplate, Airport,
    BoardingPass, BoardingPassField, FlightInfo, FlightSchedule, PassengerInfo,
    PassengerSegmentInfo, PriceInfo, ProductInfo,
};
pub use buttons::{
    Button, ButtonType, GameMetadata, PaymentPrice, PaymentSummary, RequestUserInfo, ShareContent,
};
pub use list::{DefaultAction, ListElement, ListTemplate, TopElementStyle};
pub use media::{MediaElement, MediaTemplate};
pub use open_graph::{OpenGraphElement, OpenGraphTemplate};

use serde::{Deserialize, Serialize};

/// Discriminator naming a template's kind on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateType {
    List,
    Media,
    OpenGraph,
    AirlineBoardingpass,
    AirlineCheckin,
    AirlineItinerary,
    AirlineUpdate,
}

/// Common prefix shared by attachment payload templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateBase {
    pub template_type: TemplateType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&TemplateType::AirlineBoardingpass).unwrap(),
            r#""airline_boardingpass""#
        );
        assert_eq!(
            serde_json::to_string(&TemplateType::OpenGraph).unwrap(),
            r#""open_graph""#
        );
    }
}

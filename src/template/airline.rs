//! Airline template schemas (boarding pass, check-in, itinerary).

use serde::{Deserialize, Serialize};

use super::{TemplateBase, TemplateType};

/// Boarding passes for one or more passengers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineBoardingPassTemplate {
    #[serde(flatten)]
    pub base: TemplateBase,
    pub intro_message: String,
    pub locale: String,
    pub boarding_pass: Vec<BoardingPass>,
}

impl AirlineBoardingPassTemplate {
    pub fn new(
        intro_message: impl Into<String>,
        locale: impl Into<String>,
        boarding_pass: Vec<BoardingPass>,
    ) -> Self {
        AirlineBoardingPassTemplate {
            base: TemplateBase {
                template_type: TemplateType::AirlineBoardingpass,
            },
            intro_message: intro_message.into(),
            locale: locale.into(),
            boarding_pass,
        }
    }
}

/// One passenger's boarding pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardingPass {
    pub passenger_name: String,
    pub pnr_number: String,
    pub seat: String,
    pub logo_image_url: String,
    pub header_image_url: String,
    pub qr_code: String,
    pub above_bar_image_url: String,
    pub auxiliary_fields: Vec<BoardingPassField>,
    pub secondary_fields: Vec<BoardingPassField>,
    pub flight_info: FlightInfo,
}

/// A labelled value rendered on the pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardingPassField {
    pub label: String,
    pub value: String,
}

/// Flight details shared by the airline templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightInfo {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub connection_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub segment_id: String,
    pub flight_number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub aircraft_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub travel_class: String,
    pub departure_airport: Airport,
    pub arrival_airport: Airport,
    pub flight_schedule: FlightSchedule,
}

/// Departure or arrival airport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    pub airport_code: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub terminal: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gate: String,
}

/// Flight times, ISO 8601 without timezone offset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightSchedule {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub boarding_time: String,
    pub departure_time: String,
    pub arrival_time: String,
}

/// Check-in reminder with flight details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineCheckInTemplate {
    #[serde(flatten)]
    pub base: TemplateBase,
    pub intro_message: String,
    pub locale: String,
    pub pnr_number: String,
    pub checkin_url: String,
    pub flight_info: Vec<FlightInfo>,
}

impl AirlineCheckInTemplate {
    pub fn new(
        intro_message: impl Into<String>,
        locale: impl Into<String>,
        pnr_number: impl Into<String>,
        checkin_url: impl Into<String>,
        flight_info: Vec<FlightInfo>,
    ) -> Self {
        AirlineCheckInTemplate {
            base: TemplateBase {
                template_type: TemplateType::AirlineCheckin,
            },
            intro_message: intro_message.into(),
            locale: locale.into(),
            pnr_number: pnr_number.into(),
            checkin_url: checkin_url.into(),
            flight_info,
        }
    }
}

/// Full itinerary confirmation with passengers, segments, and pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirlineItineraryTemplate {
    #[serde(flatten)]
    pub base: TemplateBase,
    pub intro_message: String,
    pub locale: String,
    pub pnr_number: String,
    pub passenger_info: Vec<PassengerInfo>,
    pub flight_info: Vec<FlightInfo>,
    pub passenger_segment_info: Vec<PassengerSegmentInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub price_info: Vec<PriceInfo>,
    pub base_price: String,
    pub tax: String,
    pub total_price: String,
    pub currency: String,
}

/// A ticketed passenger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerInfo {
    pub name: String,
    pub ticket_number: String,
    pub passenger_id: String,
}

/// Seat assignment for one passenger on one segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerSegmentInfo {
    pub segment_id: String,
    pub passenger_id: String,
    pub seat: String,
    pub seat_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_info: Vec<ProductInfo>,
}

/// Purchased extra shown on a segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub title: String,
    pub value: String,
}

/// One priced line item of the itinerary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceInfo {
    pub title: String,
    pub amount: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boarding_pass_template_carries_type() {
        let template = AirlineBoardingPassTemplate::new("Your pass", "en_US", Vec::new());
        let value = serde_json::to_value(&template).unwrap();
        assert_eq!(value["template_type"], "airline_boardingpass");
        assert_eq!(value["intro_message"], "Your pass");
    }
}

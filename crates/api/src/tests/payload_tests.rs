// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CreateBookingRequest, CreateBookingResponse, DiscountValidation, PaymentIntent};
use court_book::{BookingOrder, CustomerDetails};
use court_book_domain::AvailabilityGrid;
use rust_decimal::dec;
use time::Date;

fn order() -> BookingOrder {
    BookingOrder {
        facility_id: Some(42),
        slug: String::from("maple-ridge"),
        court_number: 3,
        booking_date: Date::from_calendar_date(2026, time::Month::March, 10).unwrap(),
        start_time: String::from("10:00"),
        end_time: String::from("11:00"),
        duration_minutes: 60,
        total_amount: dec!(28.53),
        discount_code: Some(String::from("SAVE10")),
        discount_amount: dec!(10.00),
        customer: CustomerDetails {
            name: String::from("Jane Doe"),
            email: String::from("jane@example.com"),
            phone: Some(String::from("555-0100")),
            external_user_id: Some(String::from("ext-7")),
        },
    }
}

#[test]
fn test_booking_payload_field_mapping() {
    let request = CreateBookingRequest::from_order(&order()).unwrap();

    assert_eq!(request.facility_id, Some(42));
    assert_eq!(request.court_number, 3);
    assert_eq!(request.booking_date, "2026-03-10");
    assert_eq!(request.start_time, "10:00");
    assert_eq!(request.end_time, "11:00");
    assert_eq!(request.duration, 60);
    assert_eq!(request.total_amount, dec!(28.53));
    assert_eq!(request.discount_code, Some(String::from("SAVE10")));
    assert_eq!(request.source, "web");
}

#[test]
fn test_booking_payload_wire_shape() {
    let request = CreateBookingRequest::from_order(&order()).unwrap();
    let json = serde_json::to_value(&request).unwrap();

    // The backend contract is camelCase.
    assert_eq!(json["facilityId"], 42);
    assert_eq!(json["courtNumber"], 3);
    assert_eq!(json["bookingDate"], "2026-03-10");
    assert_eq!(json["startTime"], "10:00");
    assert_eq!(json["endTime"], "11:00");
    assert_eq!(json["duration"], 60);
    assert_eq!(json["totalAmount"], "28.53");
    assert_eq!(json["discountCode"], "SAVE10");
    assert_eq!(json["discountAmount"], "10.00");
    assert_eq!(json["customerName"], "Jane Doe");
    assert_eq!(json["customerEmail"], "jane@example.com");
    assert_eq!(json["customerPhone"], "555-0100");
    assert_eq!(json["userId"], "ext-7");
    assert_eq!(json["source"], "web");
}

#[test]
fn test_booking_response_wire_shape() {
    let response: CreateBookingResponse =
        serde_json::from_str(r#"{"bookingId":"bk-1001"}"#).unwrap();
    assert_eq!(response.booking_id, "bk-1001");
}

#[test]
fn test_discount_validation_wire_shape() {
    let validation: DiscountValidation =
        serde_json::from_str(r#"{"discountAmount":"10.00"}"#).unwrap();
    assert_eq!(validation.discount_amount, dec!(10.00));
}

#[test]
fn test_payment_intent_wire_shape() {
    let intent: PaymentIntent = serde_json::from_str(
        r#"{"clientSecret":"pi_1_secret_2","paymentIntentId":"pi_1"}"#,
    )
    .unwrap();
    assert_eq!(intent.client_secret, "pi_1_secret_2");
    assert_eq!(intent.payment_intent_id, "pi_1");
}

#[test]
fn test_availability_grid_wire_shape() {
    // The grid arrives as a bare court -> time -> bool map.
    let grid: AvailabilityGrid =
        serde_json::from_str(r#"{"1":{"08:00":true,"09:00":false},"2":{"08:00":true}}"#).unwrap();
    assert!(grid.is_available(1, "08:00"));
    assert!(!grid.is_available(1, "09:00"));
    assert!(grid.is_available(2, "08:00"));
    assert!(!grid.is_available(3, "08:00"));
}

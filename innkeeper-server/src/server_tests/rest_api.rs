use crate::server::rest_api::models::{AvailabilityResponse, CustomerResponse, OperationResponse, RoomResponse};
use crate::server_tests::{TestClient, start_test_server};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct ErrorResponse {
	r#type: String,
	status: u16,
	message: String,
}

async fn add_single_room(client: &TestClient) {
	let response = client
		.post_json(
			"/api/rooms",
			&json!({"room_number": 101, "room_type": "Single", "price": 50.0}),
		)
		.await;
	assert_eq!(StatusCode::CREATED, response.status);
}

async fn book_alice(client: &TestClient) -> OperationResponse {
	let response = client
		.post_json(
			"/api/bookings",
			&json!({"name": "Alice", "contact": "555-1111", "room_number": 101}),
		)
		.await;
	assert_eq!(StatusCode::OK, response.status);
	response.deserialize_json()
}

#[tokio::test]
async fn should_add_and_list_rooms() {
	let (client, _context) = start_test_server().await;

	let response = client
		.post_json(
			"/api/rooms",
			&json!({"room_number": 101, "room_type": "Single", "price": 50.0}),
		)
		.await;
	assert_eq!(StatusCode::CREATED, response.status);
	let expected_room = RoomResponse {
		room_number: 101,
		room_type: "Single".to_owned(),
		price: 50.0,
		available: true,
	};
	assert_eq!(expected_room, response.deserialize_json::<RoomResponse>());

	let response = client.get("/api/rooms").await;
	assert_eq!(StatusCode::OK, response.status);
	assert_eq!(vec![expected_room], response.deserialize_json::<Vec<RoomResponse>>());
}

#[tokio::test]
async fn should_reject_duplicate_room() {
	let (client, _context) = start_test_server().await;
	add_single_room(&client).await;

	let response = client
		.post_json(
			"/api/rooms",
			&json!({"room_number": 101, "room_type": "Suite", "price": 500.0}),
		)
		.await;

	assert_eq!(StatusCode::CONFLICT, response.status);
	let error = response.deserialize_json::<ErrorResponse>();
	assert_eq!("room-already-exists", error.r#type);
	assert_eq!(409, error.status);
}

#[tokio::test]
async fn should_reject_negative_price() {
	let (client, _context) = start_test_server().await;

	let response = client
		.post_json(
			"/api/rooms",
			&json!({"room_number": 101, "room_type": "Single", "price": -1.0}),
		)
		.await;

	assert!(response.status.is_client_error(), "Got {}", response.status);
}

#[tokio::test]
async fn should_report_availability() {
	let (client, _context) = start_test_server().await;
	add_single_room(&client).await;

	let response = client.get("/api/rooms/101/availability").await;

	assert_eq!(StatusCode::OK, response.status);
	assert_eq!(
		AvailabilityResponse {
			room_number: 101,
			available: true,
		},
		response.deserialize_json()
	);
}

#[tokio::test]
async fn should_report_missing_room() {
	let (client, _context) = start_test_server().await;

	let response = client.get("/api/rooms/999/availability").await;

	assert_eq!(StatusCode::NOT_FOUND, response.status);
	assert_eq!("room-not-found", response.deserialize_json::<ErrorResponse>().r#type);
}

#[tokio::test]
async fn should_book_room() {
	let (client, _context) = start_test_server().await;
	add_single_room(&client).await;

	let booking = book_alice(&client).await;

	assert_eq!(
		OperationResponse {
			success: true,
			message: "Room 101 booked successfully for Alice!".to_owned(),
		},
		booking
	);
	let customers = client.get("/api/customers").await.deserialize_json::<Vec<CustomerResponse>>();
	assert_eq!(
		vec![CustomerResponse {
			name: "Alice".to_owned(),
			contact: "555-1111".to_owned(),
			room_number: 101,
		}],
		customers
	);
	let availability = client
		.get("/api/rooms/101/availability")
		.await
		.deserialize_json::<AvailabilityResponse>();
	assert!(!availability.available);
}

#[tokio::test]
async fn should_reject_booking_of_occupied_room() {
	let (client, _context) = start_test_server().await;
	add_single_room(&client).await;
	book_alice(&client).await;

	let response = client
		.post_json(
			"/api/bookings",
			&json!({"name": "Bob", "contact": "555-2222", "room_number": 101}),
		)
		.await;

	assert_eq!(StatusCode::CONFLICT, response.status);
	assert_eq!("room-occupied", response.deserialize_json::<ErrorResponse>().r#type);
}

#[tokio::test]
async fn should_reject_booking_of_missing_room() {
	let (client, _context) = start_test_server().await;

	let response = client
		.post_json(
			"/api/bookings",
			&json!({"name": "Bob", "contact": "555-2222", "room_number": 999}),
		)
		.await;

	assert_eq!(StatusCode::NOT_FOUND, response.status);
	assert!(response.deserialize_json::<ErrorResponse>().message.contains("not available"));
	let customers = client.get("/api/customers").await.deserialize_json::<Vec<CustomerResponse>>();
	assert!(customers.is_empty());
}

#[tokio::test]
async fn should_check_out() {
	let (client, _context) = start_test_server().await;
	add_single_room(&client).await;
	book_alice(&client).await;

	let response = client.post("/api/rooms/101/checkout").await;
	assert_eq!(StatusCode::OK, response.status);
	assert_eq!(
		"Room 101 checked out successfully!",
		response.deserialize_json::<OperationResponse>().message
	);

	let response = client.post("/api/rooms/101/checkout").await;
	assert_eq!(StatusCode::CONFLICT, response.status);
	assert_eq!("room-vacant", response.deserialize_json::<ErrorResponse>().r#type);
}

#[tokio::test]
async fn should_fail_with_internal_error_after_close() {
	let (client, context) = start_test_server().await;
	context.booking_store.close().await;

	let response = client.get("/api/rooms").await;

	assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status);
	assert_eq!("storage-failure", response.deserialize_json::<ErrorResponse>().r#type);
}

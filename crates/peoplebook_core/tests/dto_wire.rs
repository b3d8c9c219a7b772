use chrono::NaiveDate;
use peoplebook_core::{
    validate_model, CountryAddRequest, Gender, Person, PersonAddRequest, PersonResponse,
};
use serde_json::json;

#[test]
fn person_response_serializes_expected_fields() {
    let mut person = Person::new();
    person.person_name = Some("KING Hussein".to_string());
    person.email = Some("king@hussein.com".to_string());
    person.date_of_birth = NaiveDate::from_ymd_opt(1860, 1, 1);
    person.gender = Some(Gender::Male.as_str().to_string());
    let today = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();

    let response = PersonResponse::from_person(&person, Some("Nigeria".to_string()), today);
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["person_id"], person.person_id.to_string());
    assert_eq!(value["date_of_birth"], "1860-01-01");
    assert_eq!(value["gender"], "Male");
    assert_eq!(value["country_name"], "Nigeria");
    assert_eq!(value["age"], 40);
    assert_eq!(value["address"], serde_json::Value::Null);

    let decoded: PersonResponse = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, response);
}

#[test]
fn add_request_deserializes_and_reports_all_violations() {
    let request: PersonAddRequest = serde_json::from_value(json!({
        "person_name": null,
        "email": "nobody",
        "date_of_birth": "1990-05-17",
        "gender": "Female",
        "country_id": null,
        "address": null,
        "receive_news_letter": true
    }))
    .unwrap();
    assert_eq!(request.gender, Some(Gender::Female));

    let errors = validate_model(&request).unwrap_err();
    let value = serde_json::to_value(&errors).unwrap();
    assert_eq!(
        value["violations"],
        json!([
            {"field": "person_name", "rule": "required", "message": "PersonName cannot be blank"},
            {"field": "email", "rule": "email_address", "message": "Email value should be a valid email"}
        ])
    );
}

#[test]
fn country_request_accepts_missing_name() {
    let request: CountryAddRequest = serde_json::from_value(json!({"country_name": null})).unwrap();
    assert_eq!(request, CountryAddRequest::default());
}

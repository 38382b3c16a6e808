use crate::record::{Record, Status};

/// The fixed initial dataset, persisted on first access to an empty store.
///
/// Four customers with ids "1".."4".
pub fn seed_records() -> Vec<Record> {
    vec![
        Record {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            description: "Web Dev Project".to_string(),
            status: Status::Paid,
            rate: 85.0,
            balance: 0.0,
            deposit: 500.0,
        },
        Record {
            id: "2".to_string(),
            name: "Sarah Smith".to_string(),
            description: "SEO Audit".to_string(),
            status: Status::Open,
            rate: 120.0,
            balance: 350.0,
            deposit: 100.0,
        },
        Record {
            id: "3".to_string(),
            name: "Michael Brown".to_string(),
            description: "Mobile App UI".to_string(),
            status: Status::Due,
            rate: 95.0,
            balance: 1200.0,
            deposit: 0.0,
        },
        Record {
            id: "4".to_string(),
            name: "Emma Wilson".to_string(),
            description: "Consulting".to_string(),
            status: Status::Inactive,
            rate: 200.0,
            balance: 0.0,
            deposit: 0.0,
        },
    ]
}

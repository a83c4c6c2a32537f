use std::io::Write;

use serde_json::{Value, json};
use tempfile::NamedTempFile;

/// Temporary snapshot file removed when dropped.
pub struct TestSnapshot {
    file: NamedTempFile,
}

impl TestSnapshot {
    pub fn new(contents: &Value) -> Self {
        let mut file = NamedTempFile::new().expect("create snapshot file");
        write!(file, "{contents}").expect("write snapshot");
        Self { file }
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }
}

fn band(id: i32, name: &str, members: usize, rating: Option<u16>) -> Value {
    let members: Vec<Value> = (0..members)
        .map(|n| json!({ "name": format!("{name} member {n}"), "instrument": "guitar" }))
        .collect();
    json!({
        "id": id,
        "name": name,
        "genre": "rock",
        "city": null,
        "description": null,
        "members": members,
        "rating": rating,
        "created_at": format!("2024-03-{:02}T20:00:00", id),
    })
}

pub fn sample_snapshot() -> Value {
    json!({
        "bands": [
            band(1, "Arcade", 5, Some(420)),
            band(2, "Bloc", 4, None),
            band(3, "Cure", 5, Some(480)),
            band(4, "Devo", 5, Some(350)),
            band(5, "Elbow", 5, None),
            band(6, "Feist", 1, Some(390)),
            band(7, "Genesis", 5, Some(450)),
        ],
        "vacancies": [
            { "id": 1, "band_id": 1, "band_name": "Arcade", "instrument": "violin",
              "description": null, "created_at": "2024-04-01T10:00:00" },
            { "id": 2, "band_id": 2, "band_name": "Bloc", "instrument": "drums",
              "description": "weekly rehearsals", "closed": true,
              "created_at": "2024-04-02T10:00:00" },
            { "id": 3, "band_id": 1, "band_name": "Arcade", "instrument": "accordion",
              "description": null, "created_at": "2024-04-03T10:00:00" },
        ],
        "reviews": [
            { "id": 1, "band_id": 3, "author_name": "fan", "score": 5, "text": "Superb",
              "created_at": "2024-05-01T09:00:00" },
            { "id": 2, "band_id": 3, "author_name": "critic", "score": 3, "text": "Fine",
              "created_at": "2024-05-02T09:00:00" },
            { "id": 3, "band_id": 4, "author_name": "fan", "score": 4, "text": "Fun",
              "created_at": "2024-05-03T09:00:00" },
        ],
    })
}

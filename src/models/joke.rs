use uuid::Uuid;

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Joke {
    pub id: Uuid,
    pub joke: String,
    pub response: String,
}

use serde::{Deserialize, Serialize};

pub const DEFAULT_IMAGE: &str =
    "https://images.pexels.com/photos/3184339/pexels-photo-3184339.jpeg?auto=compress&cs=tinysrgb&w=300";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentorKind {
    Alumni,
    Student,
    Professor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorRecord {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub company: String,
    pub location: String,
    pub grad_year: String,
    pub expertise: Vec<String>,
    pub image: String,
    #[serde(rename = "type")]
    pub kind: MentorKind,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, rename = "linkedIn")]
    pub linked_in: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
}

// Public snapshot: the contact address stays server-side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorPublic {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub company: String,
    pub location: String,
    pub grad_year: String,
    pub expertise: Vec<String>,
    pub image: String,
    #[serde(rename = "type")]
    pub kind: MentorKind,
    pub bio: Option<String>,
    #[serde(rename = "linkedIn")]
    pub linked_in: Option<String>,
    pub availability: Option<String>,
}

impl From<&MentorRecord> for MentorPublic {
    fn from(mentor: &MentorRecord) -> Self {
        MentorPublic {
            id: mentor.id,
            name: mentor.name.clone(),
            role: mentor.role.clone(),
            company: mentor.company.clone(),
            location: mentor.location.clone(),
            grad_year: mentor.grad_year.clone(),
            expertise: mentor.expertise.clone(),
            image: mentor.image.clone(),
            kind: mentor.kind,
            bio: mentor.bio.clone(),
            linked_in: mentor.linked_in.clone(),
            availability: mentor.availability.clone(),
        }
    }
}

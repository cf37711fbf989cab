//! Referral form data model

use serde::{Deserialize, Serialize};

/// Field values of the referral form.
///
/// Serializes to the camelCase body expected by the referrals endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub referrer_name: String,
    pub referrer_email: String,
    pub referee_name: String,
    pub referee_email: String,
    pub course: String,
}

impl FormData {
    /// Get the value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ReferrerName => &self.referrer_name,
            Field::ReferrerEmail => &self.referrer_email,
            Field::RefereeName => &self.referee_name,
            Field::RefereeEmail => &self.referee_email,
            Field::Course => &self.course,
        }
    }

    /// Get a mutable handle to a field value
    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::ReferrerName => &mut self.referrer_name,
            Field::ReferrerEmail => &mut self.referrer_email,
            Field::RefereeName => &mut self.referee_name,
            Field::RefereeEmail => &mut self.referee_email,
            Field::Course => &mut self.course,
        }
    }

    /// Replace the value of a field
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// True when every field is empty
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Reset every field to empty
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The selected course, if the stored id is a known one
    pub fn selected_course(&self) -> Option<Course> {
        Course::from_id(&self.course)
    }
}

/// The five form fields in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    ReferrerName,
    ReferrerEmail,
    RefereeName,
    RefereeEmail,
    Course,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::ReferrerName,
        Field::ReferrerEmail,
        Field::RefereeName,
        Field::RefereeEmail,
        Field::Course,
    ];

    /// Label used in validation messages
    pub fn label(&self) -> &'static str {
        match self {
            Field::ReferrerName => "Referrer name",
            Field::ReferrerEmail => "Referrer email",
            Field::RefereeName => "Referee name",
            Field::RefereeEmail => "Referee email",
            Field::Course => "Course selection",
        }
    }

    /// Label shown next to the input
    pub fn form_label(&self) -> &'static str {
        match self {
            Field::ReferrerName => "Your Name",
            Field::ReferrerEmail => "Your Email",
            Field::RefereeName => "Friend's Name",
            Field::RefereeEmail => "Friend's Email",
            Field::Course => "Course",
        }
    }

    /// Key used in the JSON body
    pub fn wire_key(&self) -> &'static str {
        match self {
            Field::ReferrerName => "referrerName",
            Field::ReferrerEmail => "referrerEmail",
            Field::RefereeName => "refereeName",
            Field::RefereeEmail => "refereeEmail",
            Field::Course => "course",
        }
    }

    pub fn is_email(&self) -> bool {
        matches!(self, Field::ReferrerEmail | Field::RefereeEmail)
    }

    /// Position in display order
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Courses a referee can be referred into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Course {
    WebDevelopment,
    DataScience,
    MobileDevelopment,
}

impl Course {
    pub const ALL: [Course; 3] = [
        Course::WebDevelopment,
        Course::DataScience,
        Course::MobileDevelopment,
    ];

    /// Identifier stored in the form and sent on the wire
    pub fn id(&self) -> &'static str {
        match self {
            Course::WebDevelopment => "web-development",
            Course::DataScience => "data-science",
            Course::MobileDevelopment => "mobile-development",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Course::WebDevelopment => "Web Development",
            Course::DataScience => "Data Science",
            Course::MobileDevelopment => "Mobile Development",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|course| course.id() == id)
    }

    /// Step through the selector options, including the empty placeholder.
    ///
    /// `None` stands for "Select a course".
    pub fn cycle(current: Option<Course>, forward: bool) -> Option<Course> {
        let options = Self::ALL.len() + 1;
        let position = match current {
            None => 0,
            Some(course) => Self::ALL.iter().position(|c| *c == course).map_or(0, |i| i + 1),
        };
        let next = if forward {
            (position + 1) % options
        } else {
            (position + options - 1) % options
        };
        if next == 0 {
            None
        } else {
            Some(Self::ALL[next - 1])
        }
    }
}

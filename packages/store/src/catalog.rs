//! # Static informational content for the resident dashboard
//!
//! Sample data shown on the dashboard pages. Nothing here is persisted or edited at
//! runtime; complaints filed from the support page live only in page state.

use chrono::NaiveDate;

use crate::validate::{self, FieldError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmergencyContact {
    pub id: &'static str,
    pub name: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
}

impl EmergencyContact {
    /// `tel:` link for the dial button.
    pub fn dial_href(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

pub const EMERGENCY_CONTACTS: &[EmergencyContact] = &[
    EmergencyContact { id: "hospital", name: "District Hospital", phone: "108", address: "Main Road, Ramnagar" },
    EmergencyContact { id: "police", name: "Police Station", phone: "100", address: "Station Road, Ramnagar" },
    EmergencyContact { id: "fire", name: "Fire Station", phone: "101", address: "Central Area, Ramnagar" },
    EmergencyContact { id: "panchayat", name: "Gram Panchayat", phone: "9876543210", address: "Village Center, Ramnagar" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub content: &'static str,
    pub category: &'static str,
    pub has_document: bool,
}

pub const NOTICES: &[Notice] = &[
    Notice {
        id: 1,
        title: "Water Supply Interruption",
        date: "2025-07-20",
        content: "Due to maintenance work, water supply will be interrupted on July 22nd from 10:00 AM to 2:00 PM. Please store water accordingly.",
        category: "Utility",
        has_document: true,
    },
    Notice {
        id: 2,
        title: "School Exam Results",
        date: "2025-07-15",
        content: "The results for the annual school examinations have been published. Parents can collect the report cards from the school office between 9:00 AM and 1:00 PM on weekdays.",
        category: "Education",
        has_document: true,
    },
    Notice {
        id: 3,
        title: "COVID-19 Vaccination Drive",
        date: "2025-07-10",
        content: "A vaccination drive will be conducted at the village community hall on July 25th. All residents above 18 years are eligible. Please bring your ID proof.",
        category: "Health",
        has_document: true,
    },
    Notice {
        id: 4,
        title: "Gram Sabha Meeting",
        date: "2025-07-05",
        content: "The next Gram Sabha meeting will be held on July 30th at 11:00 AM at the Panchayat Bhawan. All villagers are requested to attend.",
        category: "Administrative",
        has_document: false,
    },
];

/// Notices whose title, content or category contains `term`, ignoring case.
/// An empty term matches everything.
pub fn search_notices(term: &str) -> Vec<&'static Notice> {
    let term = term.trim().to_lowercase();
    NOTICES
        .iter()
        .filter(|n| {
            term.is_empty()
                || n.title.to_lowercase().contains(&term)
                || n.content.to_lowercase().contains(&term)
                || n.category.to_lowercase().contains(&term)
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommunityEvent {
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub const COMMUNITY_EVENTS: &[CommunityEvent] = &[
    CommunityEvent {
        title: "Independence Day Celebration",
        date: "2025-08-15",
        time: "8:00 AM - 12:00 PM",
        location: "School Ground",
        description: "Flag hoisting, cultural performances, and a community feast.",
        category: "Cultural",
    },
    CommunityEvent {
        title: "Health Camp",
        date: "2025-07-25",
        time: "9:00 AM - 4:00 PM",
        location: "Community Center",
        description: "Free general checkup, eye examination, and basic diagnostics with the District Hospital.",
        category: "Health",
    },
    CommunityEvent {
        title: "Farmers Training Workshop",
        date: "2025-08-05",
        time: "10:00 AM - 3:00 PM",
        location: "Agricultural Extension Center",
        description: "Modern farming techniques, organic farming, and government schemes for farmers.",
        category: "Agriculture",
    },
    CommunityEvent {
        title: "Village Cleanliness Drive",
        date: "2025-07-28",
        time: "7:00 AM - 11:00 AM",
        location: "Village Center",
        description: "Cleaning streets, public spaces, and water bodies together.",
        category: "Community",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GovernmentService {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub status: &'static str,
    pub documents: &'static [&'static str],
    pub fee: &'static str,
    pub processing_time: &'static str,
    pub online: bool,
}

pub const GOVERNMENT_SERVICES: &[GovernmentService] = &[
    GovernmentService {
        id: "aadhar",
        title: "Aadhar Services",
        description: "Update Aadhar details, download e-Aadhar, and address verification",
        status: "Available",
        documents: &["Address Proof", "Identity Proof", "Photo"],
        fee: "Free",
        processing_time: "15-30 days",
        online: true,
    },
    GovernmentService {
        id: "ration",
        title: "Ration Card",
        description: "Apply for a new ration card, add or remove members, and check eligibility",
        status: "Available",
        documents: &["Income Certificate", "Address Proof", "Family Photo"],
        fee: "₹50",
        processing_time: "30-45 days",
        online: true,
    },
    GovernmentService {
        id: "pension",
        title: "Pension Yojana",
        description: "Old age, widow, and disability pension schemes",
        status: "Available",
        documents: &["Age Proof", "Income Certificate", "Bank Details"],
        fee: "Free",
        processing_time: "45-60 days",
        online: false,
    },
    GovernmentService {
        id: "pmawas",
        title: "PM Awas Yojana",
        description: "Housing scheme for economically weaker sections and low-income groups",
        status: "Limited",
        documents: &["Income Certificate", "Caste Certificate", "Bank Details"],
        fee: "Free",
        processing_time: "90-120 days",
        online: true,
    },
    GovernmentService {
        id: "certificates",
        title: "Birth/Death Certificates",
        description: "Register births and deaths, obtain certificates and corrections",
        status: "Available",
        documents: &["Hospital Certificate", "Identity Proof", "Address Proof"],
        fee: "₹25",
        processing_time: "7-15 days",
        online: true,
    },
    GovernmentService {
        id: "voter",
        title: "Voter ID Services",
        description: "New voter registration, corrections, and duplicate voter ID cards",
        status: "Available",
        documents: &["Age Proof", "Address Proof", "Photo"],
        fee: "Free",
        processing_time: "30-45 days",
        online: true,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheme {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub eligibility: &'static str,
    pub benefits: &'static str,
    pub deadline: &'static str,
}

impl Scheme {
    /// Open until the end of its deadline day.
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        NaiveDate::parse_from_str(self.deadline, "%Y-%m-%d")
            .map(|deadline| today <= deadline)
            .unwrap_or(false)
    }
}

pub const WELFARE_SCHEMES: &[Scheme] = &[
    Scheme {
        id: "pmkisan",
        name: "PM-KISAN Samman Nidhi",
        description: "Financial assistance of ₹6000 per year to farmer families",
        eligibility: "Small and marginal farmers with cultivable land",
        benefits: "₹2000 every 4 months (₹6000/year)",
        deadline: "2025-12-31",
    },
    Scheme {
        id: "ayushman",
        name: "Ayushman Bharat",
        description: "Health insurance coverage up to ₹5 lakh per family per year",
        eligibility: "Families listed in the SECC-2011 database",
        benefits: "₹5 lakh health insurance coverage",
        deadline: "2025-12-31",
    },
    Scheme {
        id: "ujjwala",
        name: "Pradhan Mantri Ujjwala Yojana",
        description: "Free LPG connections to women from BPL households",
        eligibility: "BPL families, priority to women applicants",
        benefits: "Free LPG connection + ₹1600 support",
        deadline: "2025-09-30",
    },
];

pub const FARMER_SCHEMES: &[Scheme] = &[
    Scheme {
        id: "pmkisan",
        name: "PM-KISAN Samman Nidhi",
        description: "Direct income support to farmer families",
        eligibility: "Small and marginal farmers with cultivable land",
        benefits: "₹6,000 per year in three installments",
        deadline: "2025-12-31",
    },
    Scheme {
        id: "cropinsurance",
        name: "Pradhan Mantri Fasal Bima Yojana",
        description: "Crop insurance scheme for farmers",
        eligibility: "All farmers growing notified crops",
        benefits: "Insurance coverage for crop losses",
        deadline: "2025-08-31",
    },
    Scheme {
        id: "kisancredit",
        name: "Kisan Credit Card",
        description: "Credit facility for agricultural needs",
        eligibility: "Farmers with land ownership documents",
        benefits: "Credit up to ₹3 lakh at subsidized rates",
        deadline: "2025-12-31",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApplicationRecord {
    pub service: &'static str,
    pub application_id: &'static str,
    pub status: &'static str,
    pub submitted: &'static str,
    pub last_updated: &'static str,
}

pub const SAMPLE_APPLICATIONS: &[ApplicationRecord] = &[
    ApplicationRecord {
        service: "Ration Card",
        application_id: "RC2025001234",
        status: "Under Review",
        submitted: "2025-07-15",
        last_updated: "2025-07-18",
    },
    ApplicationRecord {
        service: "Voter ID",
        application_id: "VID2025005678",
        status: "Approved",
        submitted: "2025-06-20",
        last_updated: "2025-07-10",
    },
];

/// Look up an application by its reference number, ignoring case and surrounding spaces.
pub fn find_application(application_id: &str) -> Option<&'static ApplicationRecord> {
    let wanted = application_id.trim();
    SAMPLE_APPLICATIONS
        .iter()
        .find(|a| a.application_id.eq_ignore_ascii_case(wanted))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRate {
    pub name: &'static str,
    pub variety: &'static str,
    /// Rupees per quintal.
    pub today: u32,
    pub yesterday: u32,
    pub market: &'static str,
}

impl CropRate {
    pub fn change(&self) -> i64 {
        i64::from(self.today) - i64::from(self.yesterday)
    }

    pub fn trend(&self) -> Trend {
        match self.change() {
            c if c > 0 => Trend::Up,
            c if c < 0 => Trend::Down,
            _ => Trend::Stable,
        }
    }
}

pub const CROP_RATES: &[CropRate] = &[
    CropRate { name: "Wheat", variety: "HD-2967", today: 2150, yesterday: 2100, market: "Ramnagar Mandi" },
    CropRate { name: "Rice", variety: "Basmati", today: 3200, yesterday: 3250, market: "Ramnagar Mandi" },
    CropRate { name: "Sugarcane", variety: "Co-238", today: 350, yesterday: 350, market: "District Mandi" },
    CropRate { name: "Cotton", variety: "Bt Cotton", today: 5800, yesterday: 5750, market: "Regional Market" },
    CropRate { name: "Maize", variety: "Hybrid", today: 1850, yesterday: 1900, market: "Ramnagar Mandi" },
    CropRate { name: "Mustard", variety: "Pusa Bold", today: 4200, yesterday: 4150, market: "District Mandi" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Forecast {
    pub day: &'static str,
    pub temperature: i32,
    pub condition: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weather {
    pub temperature: i32,
    pub humidity: u32,
    pub wind_speed: u32,
    pub condition: &'static str,
    pub forecast: &'static [Forecast],
}

pub const WEATHER: Weather = Weather {
    temperature: 32,
    humidity: 65,
    wind_speed: 12,
    condition: "Partly Cloudy",
    forecast: &[
        Forecast { day: "Today", temperature: 32, condition: "Partly Cloudy" },
        Forecast { day: "Tomorrow", temperature: 34, condition: "Sunny" },
        Forecast { day: "Day 3", temperature: 29, condition: "Rainy" },
        Forecast { day: "Day 4", temperature: 31, condition: "Cloudy" },
        Forecast { day: "Day 5", temperature: 33, condition: "Sunny" },
    ],
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct School {
    pub name: &'static str,
    pub kind: &'static str,
    pub address: &'static str,
    pub contact: &'static str,
    pub facilities: &'static [&'static str],
    pub classes: &'static str,
    pub strength: u32,
}

pub const SCHOOLS: &[School] = &[
    School {
        name: "Ramnagar Primary School",
        kind: "Government",
        address: "Village Center, Ramnagar",
        contact: "9876543210",
        facilities: &["Library", "Computer Lab", "Playground", "Mid-day Meal"],
        classes: "1st to 5th",
        strength: 150,
    },
    School {
        name: "Government High School Ramnagar",
        kind: "Government",
        address: "Main Road, Ramnagar",
        contact: "9876543211",
        facilities: &["Science Lab", "Library", "Sports Ground", "Computer Lab"],
        classes: "6th to 12th",
        strength: 300,
    },
    School {
        name: "Bright Future Academy",
        kind: "Private",
        address: "Station Road, Ramnagar",
        contact: "9876543212",
        facilities: &["Smart Classes", "Library", "Transport", "Hostel"],
        classes: "Nursery to 12th",
        strength: 200,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scholarship {
    pub name: &'static str,
    pub eligibility: &'static str,
    pub amount: &'static str,
    pub deadline: &'static str,
    pub open: bool,
}

pub const SCHOLARSHIPS: &[Scholarship] = &[
    Scholarship {
        name: "Merit Scholarship for SC/ST Students",
        eligibility: "Class 10th passed with 60% marks",
        amount: "₹5,000 per year",
        deadline: "2025-08-31",
        open: true,
    },
    Scholarship {
        name: "Girl Child Education Scholarship",
        eligibility: "Girls studying in Class 6th to 12th",
        amount: "₹3,000 per year",
        deadline: "2025-09-15",
        open: true,
    },
    Scholarship {
        name: "PM Scholarship for Higher Education",
        eligibility: "Class 12th passed with 75% marks",
        amount: "₹25,000 per year",
        deadline: "2025-07-30",
        open: false,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrainingProgram {
    pub name: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub next_batch: &'static str,
    pub seats: u32,
    pub fee: &'static str,
}

pub const TRAINING_PROGRAMS: &[TrainingProgram] = &[
    TrainingProgram {
        name: "Basic Computer Skills",
        duration: "3 months",
        description: "MS Office, Internet basics, and digital literacy",
        next_batch: "2025-08-01",
        seats: 25,
        fee: "Free",
    },
    TrainingProgram {
        name: "Mobile Repair Training",
        duration: "6 months",
        description: "Hands-on training for mobile phone repair and maintenance",
        next_batch: "2025-08-15",
        seats: 15,
        fee: "₹2,000",
    },
    TrainingProgram {
        name: "Tailoring & Fashion Design",
        duration: "4 months",
        description: "Tailoring, embroidery, and basic fashion design",
        next_batch: "2025-07-25",
        seats: 20,
        fee: "₹1,500",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Library {
    pub name: &'static str,
    pub address: &'static str,
    pub timings: &'static str,
    pub facilities: &'static [&'static str],
    pub contact: &'static str,
}

pub const LIBRARIES: &[Library] = &[
    Library {
        name: "Village Public Library",
        address: "Community Center, Ramnagar",
        timings: "9:00 AM - 6:00 PM",
        facilities: &["Reading Room", "Computer Access", "Study Hall", "Children's Section"],
        contact: "9876543213",
    },
    Library {
        name: "Digital Learning Center",
        address: "School Campus, Ramnagar",
        timings: "10:00 AM - 5:00 PM",
        facilities: &["Internet Access", "Online Courses", "Printing", "Video Tutorials"],
        contact: "9876543214",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Person {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const NOTABLE_PEOPLE: &[Person] = &[
    Person {
        name: "Mr. Dixit Pujari",
        title: "School Principal",
        description: "Dedicated educator promoting quality education in rural areas for over 15 years",
    },
    Person {
        name: "Mr. Ankit Sevak",
        title: "Folk Singer & Artist",
        description: "Renowned for preserving traditional folk music and cultural heritage",
    },
    Person {
        name: "Shri. Sachin Sevak",
        title: "Sarpanch",
        description: "Visionary leader with 10 years of dedicated service to village development",
    },
];

pub const COMPLAINT_TYPES: &[&str] = &["Water", "Electricity", "Road", "Sanitation", "Other"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComplaintStatus {
    Received,
    InProgress,
    Resolved,
    Rejected,
}

impl ComplaintStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ComplaintStatus::Received => "Received",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
            ComplaintStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Complaint {
    pub id: u32,
    pub name: String,
    pub phone: String,
    pub kind: String,
    pub message: String,
    pub status: ComplaintStatus,
    pub date: NaiveDate,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComplaintForm {
    pub name: String,
    pub phone: String,
    pub kind: String,
    pub message: String,
}

impl ComplaintForm {
    /// Validate the form and file it in front of `existing`, newest first.
    pub fn file(self, existing: &mut Vec<Complaint>, today: NaiveDate) -> Result<u32, FieldError> {
        for value in [&self.name, &self.phone, &self.kind, &self.message] {
            validate::required(value, "Please fill all required fields")?;
        }
        let id = existing.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        existing.insert(
            0,
            Complaint {
                id,
                name: self.name.trim().to_string(),
                phone: self.phone.trim().to_string(),
                kind: self.kind,
                message: self.message.trim().to_string(),
                status: ComplaintStatus::Received,
                date: today,
            },
        );
        Ok(id)
    }
}

pub fn sample_complaints() -> Vec<Complaint> {
    let date = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_default();
    vec![
        Complaint {
            id: 1,
            name: "Bhavik Sevak".to_string(),
            phone: "9321497459".to_string(),
            kind: "Water".to_string(),
            message: "Water supply in the eastern part of the village has been irregular for the past week.".to_string(),
            status: ComplaintStatus::InProgress,
            date: date("2025-07-15"),
        },
        Complaint {
            id: 2,
            name: "Vicky".to_string(),
            phone: "9876543211".to_string(),
            kind: "Electricity".to_string(),
            message: "Frequent power cuts in the evening hours.".to_string(),
            status: ComplaintStatus::Received,
            date: date("2025-07-18"),
        },
        Complaint {
            id: 3,
            name: "Ramesh".to_string(),
            phone: "9876543212".to_string(),
            kind: "Road".to_string(),
            message: "The road near the temple has large potholes which need immediate repair.".to_string(),
            status: ComplaintStatus::Resolved,
            date: date("2025-07-10"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_notices_matches_title_content_and_category() {
        assert_eq!(search_notices("").len(), NOTICES.len());
        assert_eq!(search_notices("water")[0].id, 1);
        assert_eq!(search_notices("HEALTH")[0].id, 3);
        assert_eq!(search_notices("panchayat bhawan")[0].id, 4);
        assert!(search_notices("cricket").is_empty());
    }

    #[test]
    fn test_crop_trend_follows_price_change() {
        let wheat = CROP_RATES.iter().find(|c| c.name == "Wheat").unwrap();
        assert_eq!(wheat.change(), 50);
        assert_eq!(wheat.trend(), Trend::Up);

        let rice = CROP_RATES.iter().find(|c| c.name == "Rice").unwrap();
        assert_eq!(rice.trend(), Trend::Down);

        let sugarcane = CROP_RATES.iter().find(|c| c.name == "Sugarcane").unwrap();
        assert_eq!(sugarcane.trend(), Trend::Stable);
    }

    #[test]
    fn test_scheme_deadline_is_inclusive() {
        let ujjwala = WELFARE_SCHEMES.iter().find(|s| s.id == "ujjwala").unwrap();
        let on = NaiveDate::from_ymd_opt(2025, 9, 30).unwrap();
        let after = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        assert!(ujjwala.is_active_on(on));
        assert!(!ujjwala.is_active_on(after));
    }

    #[test]
    fn test_find_application_ignores_case() {
        assert_eq!(find_application(" rc2025001234 ").unwrap().status, "Under Review");
        assert!(find_application("XX000").is_none());
    }

    #[test]
    fn test_complaint_form_files_newest_first() {
        let mut complaints = sample_complaints();
        let today = NaiveDate::from_ymd_opt(2025, 7, 20).unwrap();
        let form = ComplaintForm {
            name: "Sita".to_string(),
            phone: "9000000000".to_string(),
            kind: "Sanitation".to_string(),
            message: "Drain near the market is blocked".to_string(),
        };
        let id = form.file(&mut complaints, today).unwrap();
        assert_eq!(id, 4);
        assert_eq!(complaints[0].id, 4);
        assert_eq!(complaints[0].status, ComplaintStatus::Received);
        assert_eq!(complaints.len(), 4);
    }

    #[test]
    fn test_complaint_form_requires_every_field() {
        let mut complaints = Vec::new();
        let today = NaiveDate::from_ymd_opt(2025, 7, 20).unwrap();
        let form = ComplaintForm {
            name: "Sita".to_string(),
            ..Default::default()
        };
        let err = form.file(&mut complaints, today).unwrap_err();
        assert_eq!(err.message(), "Please fill all required fields");
        assert!(complaints.is_empty());
    }

    #[test]
    fn test_dial_href() {
        assert_eq!(EMERGENCY_CONTACTS[1].dial_href(), "tel:100");
    }
}

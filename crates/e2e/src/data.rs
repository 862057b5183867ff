//! Test data record - the literal inputs the suite types into the app
//!
//! Editing these values (or setting the corresponding `TRAVNER_*`
//! environment variables) is the supported customization point; nothing
//! else in the suite is meant to be reconfigured per deployment.

/// Flat record of credentials, OTP and fixture paths used by the cases.
#[derive(Debug, Clone)]
pub struct TestData {
    pub email: String,
    pub password: String,
    pub new_password: String,
    pub wrong_password: String,
    pub otp: String,

    /// Document uploaded during guide signup
    pub document_path: String,

    /// Photos for the social upload cases; uploads must point at real files
    pub photo_path: String,
    pub second_photo_path: String,

    /// Video for the social upload cases
    pub video_path: String,
}

impl Default for TestData {
    fn default() -> Self {
        Self {
            email: "joy@gmail.com".to_string(),
            password: "joy2001".to_string(),
            new_password: "joy123456".to_string(),
            wrong_password: "joy234".to_string(),
            otp: "123456".to_string(),
            document_path: "fixtures/sample.pdf".to_string(),
            photo_path: "fixtures/sample1.jpg".to_string(),
            second_photo_path: "fixtures/sample2.jpg".to_string(),
            video_path: "fixtures/sample.mp4".to_string(),
        }
    }
}

impl TestData {
    /// Defaults with `TRAVNER_*` environment overrides applied.
    pub fn from_env() -> Self {
        let mut data = Self::default();
        override_from_env(&mut data.email, "TRAVNER_EMAIL");
        override_from_env(&mut data.password, "TRAVNER_PASSWORD");
        override_from_env(&mut data.new_password, "TRAVNER_NEW_PASSWORD");
        override_from_env(&mut data.wrong_password, "TRAVNER_WRONG_PASSWORD");
        override_from_env(&mut data.otp, "TRAVNER_OTP");
        override_from_env(&mut data.document_path, "TRAVNER_DOCUMENT");
        override_from_env(&mut data.photo_path, "TRAVNER_PHOTO");
        override_from_env(&mut data.second_photo_path, "TRAVNER_SECOND_PHOTO");
        override_from_env(&mut data.video_path, "TRAVNER_VIDEO");
        data
    }

    /// The two photo paths joined the way a multi-file input expects them.
    pub fn photo_batch(&self) -> String {
        format!("{}\n{}", self.photo_path, self.second_photo_path)
    }
}

fn override_from_env(slot: &mut String, var: &str) {
    if let Ok(value) = std::env::var(var) {
        *slot = value;
    }
}

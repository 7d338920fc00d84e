//! Built-in field calculation functions of the event API

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinFunction {
    CalcAvgLoudness,
    CalcMaxLoudness,
    GetLatLon,
    CalcSpeed,
    DistanceTo,
    GetDirection,
    GetPostcode,
    GetCity,
    CallerIdentification,
    GetContactEmails,
    GetContactPhones,
    GetContactLists,
    GetMessagePhones,
    GetMessageContent,
    GetImageData,
    UserDefined,
}

impl BuiltinFunction {
    pub fn from_name(name: &str) -> Self {
        match name {
            "calcAvgLoudness" => BuiltinFunction::CalcAvgLoudness,
            "calcMaxLoudness" => BuiltinFunction::CalcMaxLoudness,
            "getLatLon" => BuiltinFunction::GetLatLon,
            "calcSpeed" => BuiltinFunction::CalcSpeed,
            "distanceTo" => BuiltinFunction::DistanceTo,
            "getDirection" => BuiltinFunction::GetDirection,
            "getPostcode" => BuiltinFunction::GetPostcode,
            "getCity" => BuiltinFunction::GetCity,
            "callerIdentification" => BuiltinFunction::CallerIdentification,
            "getContactEmails" => BuiltinFunction::GetContactEmails,
            "getContactPhones" => BuiltinFunction::GetContactPhones,
            "getContactLists" => BuiltinFunction::GetContactLists,
            "getMessagePhones" => BuiltinFunction::GetMessagePhones,
            "getMessageContent" => BuiltinFunction::GetMessageContent,
            "getImageData" => BuiltinFunction::GetImageData,
            _ => BuiltinFunction::UserDefined,
        }
    }

    /// Input/output summary
    pub fn description(&self) -> &'static str {
        match self {
            BuiltinFunction::CalcAvgLoudness => "with AUDIO_DATA input and avgLoudness output.",
            BuiltinFunction::CalcMaxLoudness => "with AUDIO_DATA input and maxLoudness output.",
            BuiltinFunction::GetLatLon => "outputting location.",
            BuiltinFunction::CalcSpeed => "outputting speed.",
            BuiltinFunction::DistanceTo => "with LAN_LON input and distance output.",
            BuiltinFunction::GetDirection => "outputting direction.",
            BuiltinFunction::GetPostcode => "with LAN_LON input and postcode output.",
            BuiltinFunction::GetCity => "with LAN_LON input and city output.",
            BuiltinFunction::CallerIdentification => {
                "outputting the phone number of incoming calls."
            }
            BuiltinFunction::GetContactEmails => "outputting contact emails.",
            BuiltinFunction::GetContactPhones => "outputting contact phones.",
            BuiltinFunction::GetContactLists => "outputting contact lists.",
            BuiltinFunction::GetMessagePhones => {
                "outputting the message sender of incoming messages."
            }
            BuiltinFunction::GetMessageContent => "outputting message lists.",
            BuiltinFunction::GetImageData => "outputting image data.",
            BuiltinFunction::UserDefined => {
                "User defined functions, please analyze it with PrivacyStreams Android Analyzer."
            }
        }
    }
}

/// A field calculation function assigned inside an analyzed method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuiltinFunctionUse {
    /// Signature of the method containing the assignment
    pub method: String,
    /// Invoked function name as written
    pub name: String,
    pub function: BuiltinFunction,
}

impl BuiltinFunctionUse {
    pub fn new(method: &str, name: &str) -> Self {
        Self {
            method: method.to_string(),
            name: name.to_string(),
            function: BuiltinFunction::from_name(name),
        }
    }

    /// `Built-in function is calcSpeed, outputting speed.`
    pub fn summary(&self) -> String {
        format!(
            "Built-in function is {}, {}",
            self.name,
            self.function.description()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_user_defined_functions() {
        assert_eq!(
            BuiltinFunction::from_name("getCity"),
            BuiltinFunction::GetCity
        );
        let custom = BuiltinFunctionUse::new("<a.B: void m()>", "myFunction");
        assert_eq!(custom.function, BuiltinFunction::UserDefined);
        assert_eq!(
            BuiltinFunctionUse::new("<a.B: void m()>", "calcSpeed").summary(),
            "Built-in function is calcSpeed, outputting speed."
        );
    }
}

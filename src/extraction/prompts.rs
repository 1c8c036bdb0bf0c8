//! Prompt templates and function tools for the extraction oracle

use crate::oracle::client::ToolSpec;
use serde_json::json;

pub const CANDIDATE_INFO_PROMPT: &str = "\
You are a helpful assistant extracting candidate information from a resume.\n\n\
Use the function 'get_general_info' to provide the candidate's:\n\
Full Name\tCurrent Company\tCurrent Position\tPrevious Company 1\tPosition 1\t\
Previous Company 2\tPrevious Position 2\tCurrent Country\tCurrent City (Prefecture)\t\
Age (+/- x)\tGender\tJapanese Level\tEnglish Level\tOther Languages\n\n\
Gender (options):\n\
1) Male\n\
2) Female\n\n\
Age example with margin of error: '35 +/- 2'. If unclear, guess or put 'Unknown'.\n\n\
Language (Japanese): Choose 1 Option\n\
1) Native\n\
2) Fluent (Fluent communication in Japanese, or N1, or advanced)\n\
3) Business (N2 level; can speak but not fluent)\n\
4) Reading/Writing (Can communicate over email/resume)\n\
5) None\n\n\
Language (English): Choose 1 Option\n\
1) Native\n\
2) Fluent (Fluent communication, studied abroad, or TOEIC > 900)\n\
3) Business (Can speak English, not fluent)\n\
4) Reading/Writing (Can communicate over email/resume)\n\
5) None\n\n\
If you cannot infer some details, guess or say 'Unknown'.\n";

pub const JOB_INFO_PROMPT: &str = "\
You are a helpful assistant extracting job information from a job description.\n\n\
Use the function 'get_job_info' to provide the job's:\n\
Company Name, Position, Country, City, required Japanese level, required English level,\n\
target candidate age, headquarters location, headcount bracket, and job level.\n\n\
Headquarters location (options):\n\
1) Domestic (headquartered in the job's country)\n\
2) Global (headquartered abroad)\n\n\
Language levels use the options Native, Fluent, Business, Reading/Writing, None.\n\
If you cannot infer some details, guess or say 'Unknown'.\n";

pub const INDUSTRY_GRID_PROMPT: &str = "\
You are a helpful assistant classifying a document into an industry taxonomy.\n\n\
Use the function 'generate_industry_labels' to provide the labels.\n\
Reference the following Industry grid and select the best fit option.\n\
Select one at a time starting from I1, then selecting one of the options from I2, \
then from I3. I4 is free space to tag keywords for better sorting.\n\
You cannot change rows. For example, anyone in I2 Cloud must be in SaaS, XaaS, \
Security, or Consulting for I3.\n\n\
I1: Digital; I2: Cloud; I3: SaaS, XaaS, Security, Consulting; I4: Sales, Marketing, \
Analytics, Network, Security Eng, Design, HR, Finance, Cloud Compute, AI, Data, Other[Propose]\n\
I1: Digital; I2: Platform; I3: SaaS, XaaS, Security, Consulting; I4: Food Delivery, \
Logistics, EdTech, TravelTech, Social Media, Chatapps, Payments, Insurtech, Exchange, Blockchain\n\
I1: Physical; I2: Robotics; I3: Mobility, Space, VR&AR, Smart Cities, Robots, 3D Printing; \
I4: Autonomous Driving/Robots/Satellites/Launch\n\
I1: Physical; I2: Semicon; I3: Telco, Data Center, Chip Design, Fabrication, Quantum; \
I4: Licensing, inhouse\n\
I1: Physical; I2: Energy; I3: Solar, Nuclear, Hydrogen, Batteries, Charging; I4: Materials\n\
I1: Consulting; I2: Strategy; I3: Strategy/Management; I4: MBB, Big Consulting, Other\n\
I1: Consulting; I2: Corporate; I3: HR/Accounting/Marketing/Research;";

pub const FUNCTION_GRID_PROMPT: &str = "\
You are a helpful assistant classifying a document into a function taxonomy.\n\n\
Use the function 'generate_function_labels' to provide the labels.\n\
Reference the following Function grid and select the best fit option.\n\
Select one at a time starting from F1, then selecting one of the options from F2, \
then from F3. F4 is free space to tag keywords for better sorting.\n\
You cannot change rows. For example, anyone in F2 Sales must be in AE, BDM, CSM, \
Inside Sales, SE, Partner, Consultant, Other for F3.\n\n\
F1: GTM; F2: Sales; F3: AE, BDM, CSM, Inside Sales, SE, Partner, Consultant, Other\n\
F1: GTM; F2: Marketing; F3: Digital, Field, Community, PR, Comms, Growth, Social, Content\n";

fn string_property(description: &str) -> serde_json::Value {
    json!({"type": "string", "description": description})
}

pub fn candidate_info_tool() -> ToolSpec {
    ToolSpec {
        name: "get_general_info".to_string(),
        description: "Get the candidate's general information from the resume text".to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "name": string_property("The name of the candidate"),
                "current_company": string_property("The current company of the candidate"),
                "current_position": string_property("The current position of the candidate"),
                "previous_company_1": string_property("The first previous company of the candidate"),
                "previous_position_1": string_property("The first previous position of the candidate"),
                "previous_company_2": string_property("The second previous company of the candidate"),
                "previous_position_2": string_property("The second previous position of the candidate"),
                "country": string_property("The country of the candidate"),
                "city": string_property("The city of the candidate"),
                "age": string_property("The age of the candidate, optionally with a margin like '35 +/- 2'"),
                "gender": string_property("The gender of the candidate"),
                "japanese_level": string_property("The Japanese level of the candidate"),
                "english_level": string_property("The English level of the candidate"),
                "other_languages": string_property("The other languages of the candidate"),
            },
            "required": [
                "name", "current_company", "current_position",
                "previous_company_1", "previous_position_1",
                "previous_company_2", "previous_position_2",
                "country", "city", "age", "gender",
                "japanese_level", "english_level", "other_languages"
            ],
        }),
    }
}

pub fn job_info_tool() -> ToolSpec {
    ToolSpec {
        name: "get_job_info".to_string(),
        description: "Get the job's general information from the job description text".to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "company": string_property("The name of the company"),
                "position": string_property("The position of the job description"),
                "country": string_property("The country of the job description"),
                "city": string_property("The city of the job description"),
                "japanese_level": string_property("The required Japanese level for the role"),
                "english_level": string_property("The required English level for the role"),
                "target_age": string_property("The target candidate age, if stated"),
                "headquarters": string_property("Whether the employer HQ is Domestic or Global"),
                "headcount": string_property("The company headcount bracket"),
                "job_level": string_property("The seniority level of the role"),
            },
            "required": [
                "company", "position", "country", "city",
                "japanese_level", "english_level", "target_age",
                "headquarters", "headcount", "job_level"
            ],
        }),
    }
}

pub fn industry_labels_tool() -> ToolSpec {
    taxonomy_tool("generate_industry_labels", "industry", "I")
}

pub fn function_labels_tool() -> ToolSpec {
    taxonomy_tool("generate_function_labels", "function", "F")
}

fn taxonomy_tool(name: &str, axis: &str, prefix: &str) -> ToolSpec {
    let mut properties = serde_json::Map::new();
    for level in 1..=4 {
        let key = format!("{}{}", prefix, level);
        properties.insert(
            key.clone(),
            string_property(&format!("The {} label for {}", axis, key)),
        );
    }

    ToolSpec {
        name: name.to_string(),
        description: format!("Generate {} labels for the document", axis),
        parameters: json!({
            "type": "object",
            "properties": properties,
            "required": [
                format!("{}1", prefix), format!("{}2", prefix),
                format!("{}3", prefix), format!("{}4", prefix)
            ],
        }),
    }
}

//! Infinite Campus export headers.

use sis_model::CanonicalField;

pub const INFINITE_CAMPUS: &[(&str, CanonicalField)] = &[
    ("Incident Number", CanonicalField::IncidentNumber),
    ("Incident_Number", CanonicalField::IncidentNumber),
    ("Event_ID", CanonicalField::IncidentNumber),
    ("Event ID", CanonicalField::IncidentNumber),
    ("EventID", CanonicalField::IncidentNumber),

    ("Incident Date", CanonicalField::IncidentDate),
    ("Incident_Date", CanonicalField::IncidentDate),
    ("Incident Date & Time", CanonicalField::IncidentDate),
    ("Date of Incident", CanonicalField::IncidentDate),
    ("Date_of_Incident", CanonicalField::IncidentDate),

    ("Calendar Name", CanonicalField::Campus),
    ("Calendar_Name", CanonicalField::Campus),
    ("School Name", CanonicalField::Campus),
    ("School_Name", CanonicalField::Campus),
    ("Campus", CanonicalField::Campus),
    ("Campus Name", CanonicalField::Campus),
    ("Campus_Name", CanonicalField::Campus),
    ("School", CanonicalField::Campus),

    ("Grade", CanonicalField::Grade),
    ("Grade Level", CanonicalField::Grade),
    ("Grade_Level", CanonicalField::Grade),
    ("Student Grade Level", CanonicalField::Grade),
    ("Student_Grade_Level", CanonicalField::Grade),
    ("Student Grade", CanonicalField::Grade),
    ("Student_Grade", CanonicalField::Grade),

    ("Event Type", CanonicalField::IncidentType),
    ("Event_Type", CanonicalField::IncidentType),
    ("Incident Type", CanonicalField::IncidentType),
    ("Incident_Type", CanonicalField::IncidentType),
    ("Behavior Type", CanonicalField::IncidentType),
    ("Behavior_Type", CanonicalField::IncidentType),

    ("Location", CanonicalField::Location),
    ("Event Location", CanonicalField::Location),
    ("Event_Location", CanonicalField::Location),
    ("Incident Location", CanonicalField::Location),
    ("Incident_Location", CanonicalField::Location),

    ("Period", CanonicalField::TimeBlock),
    ("Class Period", CanonicalField::TimeBlock),
    ("Class_Period", CanonicalField::TimeBlock),
    ("Time Block", CanonicalField::TimeBlock),
    ("Time_Block", CanonicalField::TimeBlock),

    ("Staff Response", CanonicalField::Response),
    ("Staff_Response", CanonicalField::Response),
    ("Action Taken", CanonicalField::Response),
    ("Action_Taken", CanonicalField::Response),

    ("Resolution Type", CanonicalField::ConsequenceType),
    ("Resolution_Type", CanonicalField::ConsequenceType),
    ("Resolution", CanonicalField::ConsequenceType),
    ("Consequence Type", CanonicalField::ConsequenceType),
    ("Consequence_Type", CanonicalField::ConsequenceType),
    ("Action Type", CanonicalField::ConsequenceType),
    ("Action_Type", CanonicalField::ConsequenceType),
    ("Intervention Type", CanonicalField::ConsequenceType),
    ("Intervention_Type", CanonicalField::ConsequenceType),

    ("Consequence Start", CanonicalField::ConsequenceStartDate),
    ("Consequence_Start", CanonicalField::ConsequenceStartDate),
    ("Consequence Start Date", CanonicalField::ConsequenceStartDate),
    ("Consequence_Start_Date", CanonicalField::ConsequenceStartDate),
    ("Start Date", CanonicalField::ConsequenceStartDate),
    ("Start_Date", CanonicalField::ConsequenceStartDate),
    ("Begin Date", CanonicalField::ConsequenceStartDate),
    ("Begin_Date", CanonicalField::ConsequenceStartDate),

    ("Consequence End", CanonicalField::ConsequenceEndDate),
    ("Consequence_End", CanonicalField::ConsequenceEndDate),
    ("Consequence End Date", CanonicalField::ConsequenceEndDate),
    ("Consequence_End_Date", CanonicalField::ConsequenceEndDate),
    ("End Date", CanonicalField::ConsequenceEndDate),
    ("End_Date", CanonicalField::ConsequenceEndDate),
    ("Return Date", CanonicalField::ConsequenceEndDate),
    ("Return_Date", CanonicalField::ConsequenceEndDate),

    ("Days Removed", CanonicalField::DaysRemoved),
    ("Days_Removed", CanonicalField::DaysRemoved),
    ("Days Suspended", CanonicalField::DaysRemoved),
    ("Days_Suspended", CanonicalField::DaysRemoved),
    ("Number of Days", CanonicalField::DaysRemoved),
    ("Number_of_Days", CanonicalField::DaysRemoved),

    ("Instructional Minutes Lost", CanonicalField::InstructionalMinutes),
    ("Instructional_Minutes_Lost", CanonicalField::InstructionalMinutes),
    ("Instructional Minutes", CanonicalField::InstructionalMinutes),
    ("Instructional_Minutes", CanonicalField::InstructionalMinutes),
    ("Minutes Lost", CanonicalField::InstructionalMinutes),
    ("Minutes_Lost", CanonicalField::InstructionalMinutes),

    ("Race", CanonicalField::Race),
    ("Race/Ethnicity", CanonicalField::Race),
    ("Ethnicity", CanonicalField::Race),

    ("Gender", CanonicalField::Gender),
    ("Sex", CanonicalField::Gender),

    ("Special Education", CanonicalField::SpecialPopulation),
    ("Special_Education", CanonicalField::SpecialPopulation),
    ("IEP", CanonicalField::SpecialPopulation),
    ("ELL", CanonicalField::SpecialPopulation),
    ("LEP", CanonicalField::SpecialPopulation),
    ("504 Status", CanonicalField::SpecialPopulation),
    ("504_Status", CanonicalField::SpecialPopulation),
    ("Disability Status", CanonicalField::SpecialPopulation),
    ("Disability_Status", CanonicalField::SpecialPopulation),
];

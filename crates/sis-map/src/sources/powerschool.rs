//! PowerSchool export headers.

use sis_model::CanonicalField;

pub const POWERSCHOOL: &[(&str, CanonicalField)] = &[
    ("Incident Number", CanonicalField::IncidentNumber),
    ("Incident_Number", CanonicalField::IncidentNumber),
    ("Incident_ID", CanonicalField::IncidentNumber),
    ("Incident ID", CanonicalField::IncidentNumber),
    ("Offense_ID", CanonicalField::IncidentNumber),
    ("Offense ID", CanonicalField::IncidentNumber),
    ("Offense_Number", CanonicalField::IncidentNumber),
    ("Offense Number", CanonicalField::IncidentNumber),

    ("Incident_Date", CanonicalField::IncidentDate),
    ("Incident Date", CanonicalField::IncidentDate),
    ("Date_Of_Incident", CanonicalField::IncidentDate),
    ("Date of Incident", CanonicalField::IncidentDate),
    ("Offense_Date", CanonicalField::IncidentDate),
    ("Offense Date", CanonicalField::IncidentDate),

    ("School_Name", CanonicalField::Campus),
    ("School Name", CanonicalField::Campus),
    ("Campus_Name", CanonicalField::Campus),
    ("Campus Name", CanonicalField::Campus),
    ("School", CanonicalField::Campus),
    ("Campus", CanonicalField::Campus),

    ("Grade_Level", CanonicalField::Grade),
    ("Grade Level", CanonicalField::Grade),
    ("Grade", CanonicalField::Grade),
    ("Student_Grade", CanonicalField::Grade),
    ("Student Grade", CanonicalField::Grade),
    ("Student Grade Level", CanonicalField::Grade),
    ("Student_Grade_Level", CanonicalField::Grade),

    ("Offense_Type", CanonicalField::IncidentType),
    ("Offense Type", CanonicalField::IncidentType),
    ("Incident_Type", CanonicalField::IncidentType),
    ("Incident Type", CanonicalField::IncidentType),
    ("Behavior_Type", CanonicalField::IncidentType),
    ("Behavior Type", CanonicalField::IncidentType),

    ("Offense_Location", CanonicalField::Location),
    ("Offense Location", CanonicalField::Location),
    ("Incident_Location", CanonicalField::Location),
    ("Incident Location", CanonicalField::Location),
    ("Location", CanonicalField::Location),

    ("Class_Period", CanonicalField::TimeBlock),
    ("Class Period", CanonicalField::TimeBlock),
    ("Period", CanonicalField::TimeBlock),
    ("TimeBlock", CanonicalField::TimeBlock),

    ("Action_Taken", CanonicalField::Response),
    ("Action Taken", CanonicalField::Response),
    ("Staff_Response", CanonicalField::Response),
    ("Staff Response", CanonicalField::Response),

    ("Consequence_Type", CanonicalField::ConsequenceType),
    ("Consequence Type", CanonicalField::ConsequenceType),
    ("Action_Type", CanonicalField::ConsequenceType),
    ("Action Type", CanonicalField::ConsequenceType),
    ("Response_Type", CanonicalField::ConsequenceType),
    ("Response Type", CanonicalField::ConsequenceType),

    ("Consequence_Start_Date", CanonicalField::ConsequenceStartDate),
    ("Consequence Start Date", CanonicalField::ConsequenceStartDate),
    ("Start_Date", CanonicalField::ConsequenceStartDate),
    ("Start Date", CanonicalField::ConsequenceStartDate),
    ("Action_Start_Date", CanonicalField::ConsequenceStartDate),
    ("Action Start Date", CanonicalField::ConsequenceStartDate),
    ("ActionStartDate", CanonicalField::ConsequenceStartDate),
    ("Suspension Start Date", CanonicalField::ConsequenceStartDate),
    ("Suspension_Start_Date", CanonicalField::ConsequenceStartDate),

    ("Consequence_End_Date", CanonicalField::ConsequenceEndDate),
    ("Consequence End Date", CanonicalField::ConsequenceEndDate),
    ("End_Date", CanonicalField::ConsequenceEndDate),
    ("End Date", CanonicalField::ConsequenceEndDate),
    ("Action_End_Date", CanonicalField::ConsequenceEndDate),
    ("Action End Date", CanonicalField::ConsequenceEndDate),
    ("ActionEndDate", CanonicalField::ConsequenceEndDate),
    ("Suspension End Date", CanonicalField::ConsequenceEndDate),
    ("Suspension_End_Date", CanonicalField::ConsequenceEndDate),
    ("Return Date", CanonicalField::ConsequenceEndDate),
    ("Return_Date", CanonicalField::ConsequenceEndDate),

    ("Days_Removed", CanonicalField::DaysRemoved),
    ("Days Removed", CanonicalField::DaysRemoved),
    ("Days_Assigned", CanonicalField::DaysRemoved),
    ("Days Assigned", CanonicalField::DaysRemoved),
    ("DaysAssigned", CanonicalField::DaysRemoved),
    ("Days_Suspended", CanonicalField::DaysRemoved),
    ("Days Suspended", CanonicalField::DaysRemoved),
    ("Number_of_Days", CanonicalField::DaysRemoved),
    ("Number of Days", CanonicalField::DaysRemoved),

    ("Instructional_Minutes_Lost", CanonicalField::InstructionalMinutes),
    ("Instructional Minutes Lost", CanonicalField::InstructionalMinutes),
    ("Minutes_Lost", CanonicalField::InstructionalMinutes),
    ("Minutes Lost", CanonicalField::InstructionalMinutes),
    ("Instructional_Minutes", CanonicalField::InstructionalMinutes),
    ("Instructional Minutes", CanonicalField::InstructionalMinutes),

    ("Race", CanonicalField::Race),
    ("Ethnicity", CanonicalField::Race),
    ("Race_Ethnicity", CanonicalField::Race),
    ("Race/Ethnicity", CanonicalField::Race),

    ("Gender", CanonicalField::Gender),
    ("Sex", CanonicalField::Gender),

    ("Special_Ed", CanonicalField::SpecialPopulation),
    ("Special Ed", CanonicalField::SpecialPopulation),
    ("Special_Education", CanonicalField::SpecialPopulation),
    ("Special Education", CanonicalField::SpecialPopulation),
    ("IEP", CanonicalField::SpecialPopulation),
    ("504_Status", CanonicalField::SpecialPopulation),
    ("504 Status", CanonicalField::SpecialPopulation),
    ("ELL", CanonicalField::SpecialPopulation),
    ("LEP", CanonicalField::SpecialPopulation),
];

//! Skyward export headers.

use sis_model::CanonicalField;

pub const SKYWARD: &[(&str, CanonicalField)] = &[
    ("Incident Number", CanonicalField::IncidentNumber),
    ("Incident_Number", CanonicalField::IncidentNumber),
    ("Incident #", CanonicalField::IncidentNumber),
    ("Incident#", CanonicalField::IncidentNumber),
    ("Incident Nbr", CanonicalField::IncidentNumber),
    ("Incident_Nbr", CanonicalField::IncidentNumber),
    ("Inc Number", CanonicalField::IncidentNumber),
    ("Inc_Number", CanonicalField::IncidentNumber),
    ("Inc #", CanonicalField::IncidentNumber),
    ("Inc#", CanonicalField::IncidentNumber),

    ("Incident Date & Time", CanonicalField::IncidentDate),
    ("Incident Date and Time", CanonicalField::IncidentDate),
    ("Incident_Date_Time", CanonicalField::IncidentDate),
    ("Incident Date", CanonicalField::IncidentDate),
    ("Incident_Date", CanonicalField::IncidentDate),
    ("Incident DateTime", CanonicalField::IncidentDate),
    ("Incident_DateTime", CanonicalField::IncidentDate),

    ("Building", CanonicalField::Campus),
    ("Building Name", CanonicalField::Campus),
    ("Building_Name", CanonicalField::Campus),
    ("Entity Code", CanonicalField::Campus),
    ("Entity_Code", CanonicalField::Campus),
    ("Campus", CanonicalField::Campus),
    ("Campus_Name", CanonicalField::Campus),
    ("Campus Name", CanonicalField::Campus),
    ("School", CanonicalField::Campus),

    ("Grade Level", CanonicalField::Grade),
    ("Grade_Level", CanonicalField::Grade),
    ("Grade", CanonicalField::Grade),
    ("Student Grade", CanonicalField::Grade),
    ("Student_Grade", CanonicalField::Grade),
    ("Student Grade Level", CanonicalField::Grade),
    ("Student_Grade_Level", CanonicalField::Grade),
    ("GradeLevel", CanonicalField::Grade),
    ("Grade Lvl", CanonicalField::Grade),
    ("Grade_Lvl", CanonicalField::Grade),

    ("Incident Type", CanonicalField::IncidentType),
    ("Incident_Type", CanonicalField::IncidentType),
    ("Behavior Type", CanonicalField::IncidentType),
    ("Behavior_Type", CanonicalField::IncidentType),
    ("Violation", CanonicalField::IncidentType),
    ("Violation Type", CanonicalField::IncidentType),
    ("Violation_Type", CanonicalField::IncidentType),

    ("Location", CanonicalField::Location),
    ("Incident Location", CanonicalField::Location),
    ("Incident_Location", CanonicalField::Location),

    ("Class Period", CanonicalField::TimeBlock),
    ("Class_Period", CanonicalField::TimeBlock),
    ("Period", CanonicalField::TimeBlock),
    ("Time Block", CanonicalField::TimeBlock),
    ("Time_Block", CanonicalField::TimeBlock),
    ("TimeBlock", CanonicalField::TimeBlock),
    ("Time Period", CanonicalField::TimeBlock),
    ("Time_Period", CanonicalField::TimeBlock),

    ("Action Taken", CanonicalField::Response),
    ("Action_Taken", CanonicalField::Response),

    ("Consequence Type", CanonicalField::ConsequenceType),
    ("Consequence_Type", CanonicalField::ConsequenceType),
    ("Action Type", CanonicalField::ConsequenceType),
    ("Action_Type", CanonicalField::ConsequenceType),

    ("Consequence Start Date", CanonicalField::ConsequenceStartDate),
    ("Consequence_Start_Date", CanonicalField::ConsequenceStartDate),
    ("Start Date", CanonicalField::ConsequenceStartDate),
    ("Start_Date", CanonicalField::ConsequenceStartDate),
    ("Begin Date", CanonicalField::ConsequenceStartDate),
    ("Begin_Date", CanonicalField::ConsequenceStartDate),

    ("Consequence End Date", CanonicalField::ConsequenceEndDate),
    ("Consequence_End_Date", CanonicalField::ConsequenceEndDate),
    ("End Date", CanonicalField::ConsequenceEndDate),
    ("End_Date", CanonicalField::ConsequenceEndDate),

    ("Days Removed", CanonicalField::DaysRemoved),
    ("Days_Removed", CanonicalField::DaysRemoved),
    ("Number of Days", CanonicalField::DaysRemoved),
    ("Number_of_Days", CanonicalField::DaysRemoved),
    ("Nbr Days", CanonicalField::DaysRemoved),
    ("Nbr_Days", CanonicalField::DaysRemoved),
    ("Num Days", CanonicalField::DaysRemoved),
    ("Num_Days", CanonicalField::DaysRemoved),

    ("Instructional Minutes Lost", CanonicalField::InstructionalMinutes),
    ("Instructional_Minutes_Lost", CanonicalField::InstructionalMinutes),
    ("Minutes Lost", CanonicalField::InstructionalMinutes),
    ("Minutes_Lost", CanonicalField::InstructionalMinutes),
    ("Instructional Minutes", CanonicalField::InstructionalMinutes),
    ("Instructional_Minutes", CanonicalField::InstructionalMinutes),

    ("Race", CanonicalField::Race),
    ("Ethnicity", CanonicalField::Race),
    ("Race/Ethnicity", CanonicalField::Race),

    ("Gender", CanonicalField::Gender),
    ("Sex", CanonicalField::Gender),

    ("Special Education", CanonicalField::SpecialPopulation),
    ("Special_Education", CanonicalField::SpecialPopulation),
    ("Spec Ed", CanonicalField::SpecialPopulation),
    ("Spec_Ed", CanonicalField::SpecialPopulation),
    ("Special Ed", CanonicalField::SpecialPopulation),
    ("Special_Ed", CanonicalField::SpecialPopulation),
];

//! DeansList export headers.

use sis_model::CanonicalField;

pub const DEANSLIST: &[(&str, CanonicalField)] = &[
    ("Incident ID", CanonicalField::IncidentNumber),
    ("Incident_ID", CanonicalField::IncidentNumber),
    ("Incident Number", CanonicalField::IncidentNumber),
    ("Incident_Number", CanonicalField::IncidentNumber),

    ("Incident Date", CanonicalField::IncidentDate),
    ("Incident_Date", CanonicalField::IncidentDate),
    ("Date of Incident", CanonicalField::IncidentDate),
    ("Date_of_Incident", CanonicalField::IncidentDate),

    ("School", CanonicalField::Campus),
    ("Campus", CanonicalField::Campus),
    ("Campus_Name", CanonicalField::Campus),
    ("Campus Name", CanonicalField::Campus),

    ("Grade", CanonicalField::Grade),
    ("Grade Level", CanonicalField::Grade),
    ("Grade_Level", CanonicalField::Grade),
    ("Student Grade", CanonicalField::Grade),
    ("Student_Grade", CanonicalField::Grade),

    ("Infraction", CanonicalField::IncidentType),
    ("Infraction Type", CanonicalField::IncidentType),
    ("Infraction_Type", CanonicalField::IncidentType),
    ("Incident Category", CanonicalField::IncidentType),
    ("Incident_Category", CanonicalField::IncidentType),
    ("Incident Type", CanonicalField::IncidentType),
    ("Incident_Type", CanonicalField::IncidentType),
    ("Behavior", CanonicalField::IncidentType),

    ("Location", CanonicalField::Location),
    ("Incident Location", CanonicalField::Location),
    ("Incident_Location", CanonicalField::Location),

    ("Period", CanonicalField::TimeBlock),
    ("Class Period", CanonicalField::TimeBlock),
    ("Class_Period", CanonicalField::TimeBlock),
    ("Time Block", CanonicalField::TimeBlock),
    ("Time_Block", CanonicalField::TimeBlock),

    ("Action Taken", CanonicalField::Response),
    ("Action_Taken", CanonicalField::Response),
    ("Staff Response", CanonicalField::Response),
    ("Staff_Response", CanonicalField::Response),

    ("Consequence", CanonicalField::ConsequenceType),
    ("Consequence Type", CanonicalField::ConsequenceType),
    ("Consequence_Type", CanonicalField::ConsequenceType),
    ("Action Type", CanonicalField::ConsequenceType),
    ("Action_Type", CanonicalField::ConsequenceType),
    ("Sanction", CanonicalField::ConsequenceType),
    ("Sanction Type", CanonicalField::ConsequenceType),
    ("Sanction_Type", CanonicalField::ConsequenceType),

    ("Start Date", CanonicalField::ConsequenceStartDate),
    ("Start_Date", CanonicalField::ConsequenceStartDate),
    ("Consequence Start Date", CanonicalField::ConsequenceStartDate),
    ("Consequence_Start_Date", CanonicalField::ConsequenceStartDate),
    ("Begin Date", CanonicalField::ConsequenceStartDate),
    ("Begin_Date", CanonicalField::ConsequenceStartDate),

    ("End Date", CanonicalField::ConsequenceEndDate),
    ("End_Date", CanonicalField::ConsequenceEndDate),
    ("Consequence End Date", CanonicalField::ConsequenceEndDate),
    ("Consequence_End_Date", CanonicalField::ConsequenceEndDate),

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

    ("SPED", CanonicalField::SpecialPopulation),
    ("IEP", CanonicalField::SpecialPopulation),
    ("ELL", CanonicalField::SpecialPopulation),
    ("LEP", CanonicalField::SpecialPopulation),
    ("Special Education", CanonicalField::SpecialPopulation),
    ("Special_Education", CanonicalField::SpecialPopulation),
    ("Spec Ed", CanonicalField::SpecialPopulation),
    ("Spec_Ed", CanonicalField::SpecialPopulation),
    ("504 Status", CanonicalField::SpecialPopulation),
    ("504_Status", CanonicalField::SpecialPopulation),
];

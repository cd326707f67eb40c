//! TEAMS export headers.

use sis_model::CanonicalField;

pub const TEAMS: &[(&str, CanonicalField)] = &[
    ("Incident Nbr", CanonicalField::IncidentNumber),
    ("Incident_Nbr", CanonicalField::IncidentNumber),
    ("Incident Number", CanonicalField::IncidentNumber),
    ("Incident_Number", CanonicalField::IncidentNumber),
    ("Referral Number", CanonicalField::IncidentNumber),
    ("Referral_Number", CanonicalField::IncidentNumber),
    ("Referral #", CanonicalField::IncidentNumber),
    ("Referral#", CanonicalField::IncidentNumber),
    ("Referral ID", CanonicalField::IncidentNumber),
    ("Referral_ID", CanonicalField::IncidentNumber),

    ("Incident Date", CanonicalField::IncidentDate),
    ("Incident_Date", CanonicalField::IncidentDate),
    ("Referral Date", CanonicalField::IncidentDate),
    ("Referral_Date", CanonicalField::IncidentDate),
    ("Date of Incident", CanonicalField::IncidentDate),
    ("Date_of_Incident", CanonicalField::IncidentDate),

    ("Campus", CanonicalField::Campus),
    ("Campus ID", CanonicalField::Campus),
    ("Campus_ID", CanonicalField::Campus),
    ("Campus Number", CanonicalField::Campus),
    ("Campus_Number", CanonicalField::Campus),
    ("Campus Name", CanonicalField::Campus),
    ("Campus_Name", CanonicalField::Campus),
    ("School", CanonicalField::Campus),
    ("School Name", CanonicalField::Campus),
    ("School_Name", CanonicalField::Campus),

    ("Grade", CanonicalField::Grade),
    ("Grade Level", CanonicalField::Grade),
    ("Grade_Level", CanonicalField::Grade),
    ("Student Grade", CanonicalField::Grade),
    ("Student_Grade", CanonicalField::Grade),

    ("Conduct Code", CanonicalField::IncidentType),
    ("Conduct_Code", CanonicalField::IncidentType),
    ("Offense Code", CanonicalField::IncidentType),
    ("Offense_Code", CanonicalField::IncidentType),
    ("Incident Type", CanonicalField::IncidentType),
    ("Incident_Type", CanonicalField::IncidentType),
    ("Conduct", CanonicalField::IncidentType),

    ("Location", CanonicalField::Location),
    ("Location Code", CanonicalField::Location),
    ("Location_Code", CanonicalField::Location),
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

    ("Consequence Type", CanonicalField::ConsequenceType),
    ("Consequence_Type", CanonicalField::ConsequenceType),
    ("Disciplinary Action", CanonicalField::ConsequenceType),
    ("Disciplinary_Action", CanonicalField::ConsequenceType),
    ("Removal Type", CanonicalField::ConsequenceType),
    ("Removal_Type", CanonicalField::ConsequenceType),
    ("Action Type", CanonicalField::ConsequenceType),
    ("Action_Type", CanonicalField::ConsequenceType),

    ("Consequence Start Date", CanonicalField::ConsequenceStartDate),
    ("Consequence_Start_Date", CanonicalField::ConsequenceStartDate),
    ("Removal Begin Date", CanonicalField::ConsequenceStartDate),
    ("Removal_Begin_Date", CanonicalField::ConsequenceStartDate),
    ("Start Date", CanonicalField::ConsequenceStartDate),
    ("Start_Date", CanonicalField::ConsequenceStartDate),
    ("Begin Date", CanonicalField::ConsequenceStartDate),
    ("Begin_Date", CanonicalField::ConsequenceStartDate),
    ("DAEP Begin Date", CanonicalField::ConsequenceStartDate),
    ("DAEP_Begin_Date", CanonicalField::ConsequenceStartDate),
    ("Suspension Start Date", CanonicalField::ConsequenceStartDate),
    ("Suspension_Start_Date", CanonicalField::ConsequenceStartDate),

    ("Consequence End Date", CanonicalField::ConsequenceEndDate),
    ("Consequence_End_Date", CanonicalField::ConsequenceEndDate),
    ("Removal End Date", CanonicalField::ConsequenceEndDate),
    ("Removal_End_Date", CanonicalField::ConsequenceEndDate),
    ("End Date", CanonicalField::ConsequenceEndDate),
    ("End_Date", CanonicalField::ConsequenceEndDate),
    ("DAEP End Date", CanonicalField::ConsequenceEndDate),
    ("DAEP_End_Date", CanonicalField::ConsequenceEndDate),
    ("Suspension End Date", CanonicalField::ConsequenceEndDate),
    ("Suspension_End_Date", CanonicalField::ConsequenceEndDate),
    ("Return Date", CanonicalField::ConsequenceEndDate),
    ("Return_Date", CanonicalField::ConsequenceEndDate),

    ("Days Removed", CanonicalField::DaysRemoved),
    ("Days_Removed", CanonicalField::DaysRemoved),
    ("Removal Days", CanonicalField::DaysRemoved),
    ("Removal_Days", CanonicalField::DaysRemoved),
    ("Days Suspended", CanonicalField::DaysRemoved),
    ("Days_Suspended", CanonicalField::DaysRemoved),
    ("Number of Days", CanonicalField::DaysRemoved),
    ("Number_of_Days", CanonicalField::DaysRemoved),
    ("Days of Removal", CanonicalField::DaysRemoved),
    ("Days_of_Removal", CanonicalField::DaysRemoved),

    ("Instructional Minutes Lost", CanonicalField::InstructionalMinutes),
    ("Instructional_Minutes_Lost", CanonicalField::InstructionalMinutes),
    ("Instructional Minutes", CanonicalField::InstructionalMinutes),
    ("Instructional_Minutes", CanonicalField::InstructionalMinutes),
    ("Minutes Lost", CanonicalField::InstructionalMinutes),
    ("Minutes_Lost", CanonicalField::InstructionalMinutes),

    ("Race", CanonicalField::Race),
    ("Race/Ethnicity", CanonicalField::Race),
    ("Ethnicity", CanonicalField::Race),
    ("Race Ethnicity", CanonicalField::Race),
    ("Race_Ethnicity", CanonicalField::Race),

    ("Gender", CanonicalField::Gender),
    ("Sex", CanonicalField::Gender),

    ("Special Education", CanonicalField::SpecialPopulation),
    ("Special_Education", CanonicalField::SpecialPopulation),
    ("Special Ed", CanonicalField::SpecialPopulation),
    ("Special_Ed", CanonicalField::SpecialPopulation),
    ("SPED", CanonicalField::SpecialPopulation),
    ("IEP", CanonicalField::SpecialPopulation),
    ("ELL", CanonicalField::SpecialPopulation),
    ("LEP", CanonicalField::SpecialPopulation),
    ("ESL", CanonicalField::SpecialPopulation),
    ("At Risk", CanonicalField::SpecialPopulation),
    ("At_Risk", CanonicalField::SpecialPopulation),
];

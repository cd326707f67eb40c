//! Generic export headers.

use sis_model::CanonicalField;

pub const GENERIC: &[(&str, CanonicalField)] = &[
    ("Incident Number", CanonicalField::IncidentNumber),
    ("Incident_Number", CanonicalField::IncidentNumber),
    ("IncidentNumber", CanonicalField::IncidentNumber),
    ("Incident #", CanonicalField::IncidentNumber),
    ("Incident#", CanonicalField::IncidentNumber),
    ("Inc Number", CanonicalField::IncidentNumber),
    ("Inc_Number", CanonicalField::IncidentNumber),
    ("Inc #", CanonicalField::IncidentNumber),
    ("Inc#", CanonicalField::IncidentNumber),
    ("Incident ID", CanonicalField::IncidentNumber),
    ("Incident_ID", CanonicalField::IncidentNumber),

    ("Incident Date & Time", CanonicalField::IncidentDate),
    ("Incident Date and Time", CanonicalField::IncidentDate),
    ("Incident_Date_Time", CanonicalField::IncidentDate),
    ("Incident_Date", CanonicalField::IncidentDate),
    ("Incident Date", CanonicalField::IncidentDate),
    ("Incident DateTime", CanonicalField::IncidentDate),
    ("Incident_DateTime", CanonicalField::IncidentDate),
    ("Date of Incident", CanonicalField::IncidentDate),
    ("Date_of_Incident", CanonicalField::IncidentDate),
    ("Date", CanonicalField::IncidentDate),

    ("Campus", CanonicalField::Campus),
    ("Campus_Name", CanonicalField::Campus),
    ("Campus Name", CanonicalField::Campus),
    ("School", CanonicalField::Campus),
    ("School Name", CanonicalField::Campus),
    ("School_Name", CanonicalField::Campus),
    ("Building", CanonicalField::Campus),
    ("Building Name", CanonicalField::Campus),
    ("Building_Name", CanonicalField::Campus),
    ("Entity Code", CanonicalField::Campus),
    ("Entity_Code", CanonicalField::Campus),

    ("Grade", CanonicalField::Grade),
    ("Grade Level", CanonicalField::Grade),
    ("Grade_Level", CanonicalField::Grade),
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
    ("Infraction Type", CanonicalField::IncidentType),
    ("Infraction_Type", CanonicalField::IncidentType),
    ("Violation", CanonicalField::IncidentType),
    ("Violation Type", CanonicalField::IncidentType),
    ("Violation_Type", CanonicalField::IncidentType),
    ("Incident Category", CanonicalField::IncidentType),
    ("Incident_Category", CanonicalField::IncidentType),

    ("Location", CanonicalField::Location),
    ("Incident Location", CanonicalField::Location),
    ("Incident_Location", CanonicalField::Location),

    ("Time Block", CanonicalField::TimeBlock),
    ("Time_Block", CanonicalField::TimeBlock),
    ("Class Period", CanonicalField::TimeBlock),
    ("Class_Period", CanonicalField::TimeBlock),
    ("Period", CanonicalField::TimeBlock),
    ("TimeBlock", CanonicalField::TimeBlock),
    ("Time Period", CanonicalField::TimeBlock),
    ("Time_Period", CanonicalField::TimeBlock),
    ("Block", CanonicalField::TimeBlock),

    ("Response", CanonicalField::Response),
    ("Action Taken", CanonicalField::Response),
    ("Action_Taken", CanonicalField::Response),
    ("Staff Response", CanonicalField::Response),
    ("Staff_Response", CanonicalField::Response),
    ("Teacher Response", CanonicalField::Response),
    ("Teacher_Response", CanonicalField::Response),
    ("Teacher Action", CanonicalField::Response),
    ("Teacher_Action", CanonicalField::Response),

    ("Consequence Type", CanonicalField::ConsequenceType),
    ("Consequence_Type", CanonicalField::ConsequenceType),
    ("Action Type", CanonicalField::ConsequenceType),
    ("Action_Type", CanonicalField::ConsequenceType),
    ("Response Type", CanonicalField::ConsequenceType),
    ("Response_Type", CanonicalField::ConsequenceType),
    ("Consequence", CanonicalField::ConsequenceType),
    ("Sanction", CanonicalField::ConsequenceType),
    ("Sanction Type", CanonicalField::ConsequenceType),
    ("Sanction_Type", CanonicalField::ConsequenceType),
    ("Intervention Type", CanonicalField::ConsequenceType),
    ("Intervention_Type", CanonicalField::ConsequenceType),
    ("Disciplinary Action", CanonicalField::ConsequenceType),
    ("Disciplinary_Action", CanonicalField::ConsequenceType),
    ("Removal Type", CanonicalField::ConsequenceType),
    ("Removal_Type", CanonicalField::ConsequenceType),
    ("Resolution Type", CanonicalField::ConsequenceType),
    ("Resolution_Type", CanonicalField::ConsequenceType),
    ("Resolution", CanonicalField::ConsequenceType),

    ("Consequence Start Date", CanonicalField::ConsequenceStartDate),
    ("Consequence_Start_Date", CanonicalField::ConsequenceStartDate),
    ("Start Date", CanonicalField::ConsequenceStartDate),
    ("Start_Date", CanonicalField::ConsequenceStartDate),
    ("Begin Date", CanonicalField::ConsequenceStartDate),
    ("Begin_Date", CanonicalField::ConsequenceStartDate),
    ("Consequence Start", CanonicalField::ConsequenceStartDate),
    ("Consequence_Start", CanonicalField::ConsequenceStartDate),
    ("Removal Begin Date", CanonicalField::ConsequenceStartDate),
    ("Removal_Begin_Date", CanonicalField::ConsequenceStartDate),
    ("Action Start Date", CanonicalField::ConsequenceStartDate),
    ("Action_Start_Date", CanonicalField::ConsequenceStartDate),
    ("Suspension Start Date", CanonicalField::ConsequenceStartDate),
    ("Suspension_Start_Date", CanonicalField::ConsequenceStartDate),

    ("Consequence End Date", CanonicalField::ConsequenceEndDate),
    ("Consequence_End_Date", CanonicalField::ConsequenceEndDate),
    ("End Date", CanonicalField::ConsequenceEndDate),
    ("End_Date", CanonicalField::ConsequenceEndDate),
    ("Consequence End", CanonicalField::ConsequenceEndDate),
    ("Consequence_End", CanonicalField::ConsequenceEndDate),
    ("Removal End Date", CanonicalField::ConsequenceEndDate),
    ("Removal_End_Date", CanonicalField::ConsequenceEndDate),
    ("Action End Date", CanonicalField::ConsequenceEndDate),
    ("Action_End_Date", CanonicalField::ConsequenceEndDate),
    ("Suspension End Date", CanonicalField::ConsequenceEndDate),
    ("Suspension_End_Date", CanonicalField::ConsequenceEndDate),
    ("Return Date", CanonicalField::ConsequenceEndDate),
    ("Return_Date", CanonicalField::ConsequenceEndDate),

    ("Days Removed", CanonicalField::DaysRemoved),
    ("Days_Removed", CanonicalField::DaysRemoved),
    ("Days Suspended", CanonicalField::DaysRemoved),
    ("Days_Suspended", CanonicalField::DaysRemoved),
    ("Number of Days", CanonicalField::DaysRemoved),
    ("Number_of_Days", CanonicalField::DaysRemoved),
    ("Days Assigned", CanonicalField::DaysRemoved),
    ("Days_Assigned", CanonicalField::DaysRemoved),
    ("Removal Days", CanonicalField::DaysRemoved),
    ("Removal_Days", CanonicalField::DaysRemoved),
    ("Num Days", CanonicalField::DaysRemoved),
    ("Num_Days", CanonicalField::DaysRemoved),
    ("Nbr Days", CanonicalField::DaysRemoved),
    ("Nbr_Days", CanonicalField::DaysRemoved),
    ("# Days", CanonicalField::DaysRemoved),
    ("Days of Removal", CanonicalField::DaysRemoved),
    ("Days_of_Removal", CanonicalField::DaysRemoved),

    ("Instructional Minutes Lost", CanonicalField::InstructionalMinutes),
    ("Instructional_Minutes_Lost", CanonicalField::InstructionalMinutes),
    ("Minutes Lost", CanonicalField::InstructionalMinutes),
    ("Minutes_Lost", CanonicalField::InstructionalMinutes),
    ("Instructional_Minutes", CanonicalField::InstructionalMinutes),
    ("Instructional Minutes", CanonicalField::InstructionalMinutes),
    ("Inst Minutes", CanonicalField::InstructionalMinutes),
    ("Inst_Minutes", CanonicalField::InstructionalMinutes),
    ("Minutes Removed", CanonicalField::InstructionalMinutes),
    ("Minutes_Removed", CanonicalField::InstructionalMinutes),
    ("Minutes of Removal", CanonicalField::InstructionalMinutes),
    ("Minutes_of_Removal", CanonicalField::InstructionalMinutes),

    ("Race", CanonicalField::Race),
    ("Ethnicity", CanonicalField::Race),
    ("Race/Ethnicity", CanonicalField::Race),
    ("Race Ethnicity", CanonicalField::Race),
    ("Race_Ethnicity", CanonicalField::Race),
    ("Student Race", CanonicalField::Race),
    ("Student_Race", CanonicalField::Race),
    ("Student Ethnicity", CanonicalField::Race),
    ("Student_Ethnicity", CanonicalField::Race),
    ("Racial/Ethnic Group", CanonicalField::Race),
    ("Racial_Ethnic_Group", CanonicalField::Race),

    ("Gender", CanonicalField::Gender),
    ("Sex", CanonicalField::Gender),
    ("Student Gender", CanonicalField::Gender),
    ("Student_Gender", CanonicalField::Gender),
    ("Student Sex", CanonicalField::Gender),
    ("Student_Sex", CanonicalField::Gender),

    ("Special Population", CanonicalField::SpecialPopulation),
    ("Special_Population", CanonicalField::SpecialPopulation),
    ("Special Education", CanonicalField::SpecialPopulation),
    ("Special_Education", CanonicalField::SpecialPopulation),
    ("Spec Ed", CanonicalField::SpecialPopulation),
    ("Spec_Ed", CanonicalField::SpecialPopulation),
    ("Special Ed", CanonicalField::SpecialPopulation),
    ("Special_Ed", CanonicalField::SpecialPopulation),
    ("SPED", CanonicalField::SpecialPopulation),
    ("IEP", CanonicalField::SpecialPopulation),
    ("ELL", CanonicalField::SpecialPopulation),
    ("LEP", CanonicalField::SpecialPopulation),
    ("ESL", CanonicalField::SpecialPopulation),
    ("Disability", CanonicalField::SpecialPopulation),
    ("Disability Status", CanonicalField::SpecialPopulation),
    ("Disability_Status", CanonicalField::SpecialPopulation),
    ("504 Status", CanonicalField::SpecialPopulation),
    ("504_Status", CanonicalField::SpecialPopulation),
    ("IEP Status", CanonicalField::SpecialPopulation),
    ("IEP_Status", CanonicalField::SpecialPopulation),
    ("English Learner", CanonicalField::SpecialPopulation),
    ("English_Learner", CanonicalField::SpecialPopulation),
    ("Limited English Proficient", CanonicalField::SpecialPopulation),
    ("Limited_English_Proficient", CanonicalField::SpecialPopulation),
    ("At Risk", CanonicalField::SpecialPopulation),
    ("At_Risk", CanonicalField::SpecialPopulation),
    ("Economically Disadvantaged", CanonicalField::SpecialPopulation),
    ("Economically_Disadvantaged", CanonicalField::SpecialPopulation),
];

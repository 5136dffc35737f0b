// Service exports
pub mod csv;
pub mod report;
pub mod roster;
pub mod survey;

pub use report::{assemble_report, save_report, write_report, MatchRow, ReportError, ReportRow, REPORT_HEADER};
pub use roster::{Roster, RosterError};
pub use survey::{normalize_survey, normalize_survey_file, parse_survey_answers, SurveyError};

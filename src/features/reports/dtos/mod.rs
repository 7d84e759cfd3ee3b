mod report_dto;

pub use report_dto::{
    CreateReportDto, SubmissionResponseDto, TimelineStageDto, TrackingResultDto,
};

use crate::domain::Extraction;
use crate::ports::{LogSource, PageWriter, Result};

/// Application service for generating the quote site from a raw IRC log
pub struct QuoteSiteService {
    log_source: Box<dyn LogSource>,
    page_writer: Box<dyn PageWriter>,
}

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteSummary {
    pub line_count: usize,
    pub quote_pages: usize,
}

impl QuoteSiteService {
    /// Creates a new QuoteSiteService with the given dependencies
    pub fn new(log_source: Box<dyn LogSource>, page_writer: Box<dyn PageWriter>) -> Self {
        Self {
            log_source,
            page_writer,
        }
    }

    /// Executes one generation run: loads the log, then writes one page per
    /// extraction plus the index. The first error aborts the whole run.
    pub fn generate(&self, extractions: &[Extraction]) -> Result<SiteSummary> {
        let log = self.log_source.load_log()?;
        self.page_writer.write_site(&log, extractions)?;
        Ok(SiteSummary {
            line_count: log.len(),
            quote_pages: extractions.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChatLog;
    use crate::error::ExtractError;
    use std::sync::{Arc, Mutex};

    struct FixedLogSource {
        lines: Vec<String>,
    }

    impl LogSource for FixedLogSource {
        fn load_log(&self) -> Result<ChatLog> {
            Ok(ChatLog::new(self.lines.clone()))
        }
    }

    struct MissingLogSource;

    impl LogSource for MissingLogSource {
        fn load_log(&self) -> Result<ChatLog> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no such log").into())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingPageWriter {
        seen: Arc<Mutex<Vec<(usize, Vec<usize>)>>>,
    }

    impl PageWriter for RecordingPageWriter {
        fn write_site(&self, log: &ChatLog, extractions: &[Extraction]) -> Result<()> {
            let linenos = extractions.iter().map(|e| e.lineno).collect();
            self.seen.lock().unwrap().push((log.len(), linenos));
            Ok(())
        }
    }

    struct FailingPageWriter;

    impl PageWriter for FailingPageWriter {
        fn write_site(&self, _log: &ChatLog, _extractions: &[Extraction]) -> Result<()> {
            Err(ExtractError::MalformedLine {
                line: "bogus".to_string(),
            })
        }
    }

    fn three_lines() -> Vec<String> {
        vec![
            "2020-11-14T15:04:15 #serenityos <alice> one".to_string(),
            "2020-11-14T15:04:16 #serenityos <bob> two".to_string(),
            "2020-11-14T15:04:17 #serenityos <carol> three".to_string(),
        ]
    }

    #[test]
    fn test_generate_hands_log_and_extractions_to_the_writer() {
        let writer = RecordingPageWriter::default();
        let service = QuoteSiteService::new(
            Box::new(FixedLogSource {
                lines: three_lines(),
            }),
            Box::new(writer.clone()),
        );

        let summary = service
            .generate(&[
                Extraction::new(2, None),
                Extraction::new(3, Some("ctx".to_string())),
            ])
            .unwrap();

        assert_eq!(summary.line_count, 3);
        assert_eq!(summary.quote_pages, 2);
        let seen = writer.seen.lock().unwrap();
        assert_eq!(seen.as_slice(), [(3, vec![2, 3])]);
    }

    #[test]
    fn test_generate_propagates_load_failure_without_writing() {
        let writer = RecordingPageWriter::default();
        let service = QuoteSiteService::new(Box::new(MissingLogSource), Box::new(writer.clone()));

        let err = service.generate(&[Extraction::new(1, None)]).unwrap_err();

        assert!(matches!(err, ExtractError::Io(_)));
        assert!(writer.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_generate_propagates_writer_failure() {
        let service = QuoteSiteService::new(
            Box::new(FixedLogSource {
                lines: three_lines(),
            }),
            Box::new(FailingPageWriter),
        );

        let err = service.generate(&[Extraction::new(1, None)]).unwrap_err();

        assert!(matches!(err, ExtractError::MalformedLine { .. }));
    }
}

//! Notice period (ihbar süresi) brackets.

use serde::{Deserialize, Serialize};

/// One notice bracket: service shorter than `below_days` earns `weeks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeBracket {
    /// Exclusive upper bound on days of service.
    pub below_days: i64,
    /// Notice weeks for service in this bracket.
    pub weeks: u32,
}

/// Notice weeks by length of service.
///
/// Brackets are checked in ascending order of `below_days`; service beyond
/// the last bracket earns `max_weeks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeSchedule {
    /// Brackets in ascending order.
    pub brackets: Vec<NoticeBracket>,
    /// Weeks for service beyond every bracket.
    pub max_weeks: u32,
}

impl Default for NoticeSchedule {
    /// 4857 md. 17: under 6 months 2 weeks, under 1.5 years 4 weeks,
    /// under 3 years 6 weeks, otherwise 8 weeks.
    fn default() -> Self {
        Self {
            brackets: vec![
                NoticeBracket {
                    below_days: 180,
                    weeks: 2,
                },
                NoticeBracket {
                    below_days: 540,
                    weeks: 4,
                },
                NoticeBracket {
                    below_days: 1080,
                    weeks: 6,
                },
            ],
            max_weeks: 8,
        }
    }
}

impl NoticeSchedule {
    /// Notice weeks for the given whole days of service.
    ///
    /// # Examples
    ///
    /// ```
    /// use bordro_engine::calculation::NoticeSchedule;
    ///
    /// let schedule = NoticeSchedule::default();
    /// assert_eq!(schedule.weeks_for(179), 2);
    /// assert_eq!(schedule.weeks_for(180), 4);
    /// assert_eq!(schedule.weeks_for(1827), 8);
    /// ```
    pub fn weeks_for(&self, total_days: i64) -> u32 {
        self.brackets
            .iter()
            .find(|bracket| total_days < bracket.below_days)
            .map(|bracket| bracket.weeks)
            .unwrap_or(self.max_weeks)
    }

    /// Sorts the brackets by bound so lookups see them in ascending order.
    pub(crate) fn normalized(mut self) -> Self {
        self.brackets.sort_by_key(|bracket| bracket.below_days);
        self
    }
}

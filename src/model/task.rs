//! Annotation task records supplied by the upstream task queue.
//!
//! The workspace only reads these to know which task opened it; it never
//! creates, caches or mutates them.

use serde::{Deserialize, Serialize};

/// Progress state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "进行中")]
    InProgress,
    #[serde(rename = "待审核")]
    PendingReview,
    #[serde(rename = "已完成")]
    Completed,
}

/// Kind of labeling work a task asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskType {
    #[serde(rename = "测井曲线标注")]
    WellLogCurve,
    #[serde(rename = "地震曲线标注")]
    SeismicCurve,
    #[serde(rename = "图像分割")]
    ImageSegmentation,
    #[serde(rename = "分类标注")]
    Classification,
}

/// One row of the task queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: String,
    pub dataset_name: String,
    pub annotator: String,
    /// Completion percentage, 0-100
    pub progress: u8,
    pub status: TaskStatus,
    #[serde(rename = "type")]
    pub task_type: TaskType,
}

impl TaskRecord {
    /// Create a task record. Progress is clamped to 100.
    pub fn new(
        id: &str,
        dataset_name: &str,
        annotator: &str,
        progress: u8,
        status: TaskStatus,
        task_type: TaskType,
    ) -> Self {
        Self {
            id: id.to_string(),
            dataset_name: dataset_name.to_string(),
            annotator: annotator.to_string(),
            progress: progress.min(100),
            status,
            task_type,
        }
    }
}

/// Read-only source of task metadata.
pub trait TaskSource {
    /// All tasks, in queue order.
    fn tasks(&self) -> &[TaskRecord];

    /// Look up a task by ID.
    fn find(&self, id: &str) -> Option<&TaskRecord> {
        self.tasks().iter().find(|t| t.id == id)
    }
}

/// A fixed, in-memory task list.
#[derive(Debug, Clone, Default)]
pub struct StaticTaskSource {
    tasks: Vec<TaskRecord>,
}

impl StaticTaskSource {
    pub fn new(tasks: Vec<TaskRecord>) -> Self {
        Self { tasks }
    }

    /// The sample queue shown on the task list page.
    pub fn sample() -> Self {
        Self::new(vec![
            TaskRecord::new(
                "101",
                "惠州凹陷惠西南-岩心切片库",
                "标注组A",
                85,
                TaskStatus::InProgress,
                TaskType::ImageSegmentation,
            ),
            TaskRecord::new(
                "102",
                "惠州凹陷惠西南-单井测井曲线",
                "标注组B",
                100,
                TaskStatus::PendingReview,
                TaskType::WellLogCurve,
            ),
            TaskRecord::new(
                "103",
                "惠州凹陷惠西南-地震数据A组",
                "AI助手",
                45,
                TaskStatus::InProgress,
                TaskType::SeismicCurve,
            ),
        ])
    }
}

impl TaskSource for StaticTaskSource {
    fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }
}

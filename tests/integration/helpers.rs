use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use uuid::Uuid;
use wyr_core::{
    application::{
        admin_action::use_case::AdminActionUseCase,
        report_question::use_case::ReportQuestionUseCase,
        score_predictions::use_case::ScorePredictionsUseCase,
        submit_question::{
            dto::{SubmissionOutcome, SubmitQuestionRequest},
            use_case::SubmitQuestionUseCase,
        },
    },
    config::Settings,
    domain::{
        creator::Credits,
        errors::DomainError,
        moderation::{AdminLog, ModerationFlag, ModerationQueue},
        question::{Question, QuestionRepository, QuestionStatus},
        vote::{Vote, VoteRepository},
    },
    infrastructure::moderation::{ModerationEngine, PriorityRanker},
};

#[derive(Clone, Default)]
pub struct InMemoryQuestions {
    inner: Arc<Mutex<HashMap<Uuid, Question>>>,
}

impl InMemoryQuestions {
    pub fn get(&self, id: Uuid) -> Option<Question> {
        self.inner.lock().unwrap().get(&id).cloned()
    }

    pub fn put(&self, question: Question) {
        self.inner.lock().unwrap().insert(question.id, question);
    }
}

impl QuestionRepository for InMemoryQuestions {
    fn find_by_id(&self, id: Uuid) -> Result<Option<Question>, DomainError> {
        Ok(self.get(id))
    }

    fn create(&self, question: &Question) -> Result<Question, DomainError> {
        self.put(question.clone());
        Ok(question.clone())
    }

    fn update_status(&self, id: Uuid, status: QuestionStatus) -> Result<(), DomainError> {
        let mut guard = self.inner.lock().unwrap();
        let question = guard
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;
        question.status = status;
        Ok(())
    }

    fn increment_flag_count(&self, id: Uuid) -> Result<u32, DomainError> {
        let mut guard = self.inner.lock().unwrap();
        let question = guard
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;
        question.flagged_count += 1;
        Ok(question.flagged_count)
    }

    fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.inner.lock().unwrap().remove(&id);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryVotes {
    inner: Arc<Mutex<Vec<Vote>>>,
}

impl InMemoryVotes {
    pub fn add(&self, vote: Vote) {
        self.inner.lock().unwrap().push(vote);
    }

    pub fn all(&self) -> Vec<Vote> {
        self.inner.lock().unwrap().clone()
    }
}

impl VoteRepository for InMemoryVotes {
    fn find_by_question(&self, question_id: Uuid) -> Result<Vec<Vote>, DomainError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.question_id == question_id)
            .cloned()
            .collect())
    }

    fn save_accuracy(&self, vote_id: Uuid, accuracy: u8) -> Result<(), DomainError> {
        let mut guard = self.inner.lock().unwrap();
        let vote = guard
            .iter_mut()
            .find(|v| v.id == vote_id)
            .ok_or_else(|| DomainError::NotFound(vote_id.to_string()))?;
        vote.bind_accuracy(accuracy)
    }
}

#[derive(Clone, Default)]
pub struct RecordingQueue {
    pub flags: Arc<Mutex<Vec<ModerationFlag>>>,
    pub actions: Arc<Mutex<Vec<AdminLog>>>,
}

impl ModerationQueue for RecordingQueue {
    fn push_flag(&self, flag: ModerationFlag) -> Result<(), DomainError> {
        self.flags.lock().unwrap().push(flag);
        Ok(())
    }

    fn record_action(&self, log: AdminLog) -> Result<(), DomainError> {
        self.actions.lock().unwrap().push(log);
        Ok(())
    }
}

pub struct TestApp {
    pub settings: Settings,
    pub questions: InMemoryQuestions,
    pub votes: InMemoryVotes,
    pub queue: RecordingQueue,
    pub submit: SubmitQuestionUseCase,
    pub report: ReportQuestionUseCase,
    pub score: ScorePredictionsUseCase,
    pub admin: AdminActionUseCase,
}

pub fn spawn_app() -> TestApp {
    let settings = Settings::default();
    let questions = InMemoryQuestions::default();
    let votes = InMemoryVotes::default();
    let queue = RecordingQueue::default();
    let engine = ModerationEngine::from_settings(&settings);

    TestApp {
        submit: SubmitQuestionUseCase::new(
            Box::new(questions.clone()),
            Box::new(queue.clone()),
            engine.clone(),
        ),
        report: ReportQuestionUseCase::new(
            Box::new(questions.clone()),
            Box::new(queue.clone()),
            engine,
            PriorityRanker::new(&settings.thresholds),
        ),
        score: ScorePredictionsUseCase::new(Box::new(questions.clone()), Box::new(votes.clone())),
        admin: AdminActionUseCase::new(Box::new(questions.clone()), Box::new(queue.clone())),
        settings,
        questions,
        votes,
        queue,
    }
}

pub fn submission(text_a: &str, text_b: &str) -> SubmitQuestionRequest {
    SubmitQuestionRequest {
        creator_id: Uuid::now_v7(),
        text_a: text_a.to_string(),
        text_b: text_b.to_string(),
        price: 0.99,
        is_paid: true,
        credits: Credits::Limited(5),
    }
}

pub fn publish(app: &TestApp, text_a: &str, text_b: &str) -> Question {
    match app.submit.execute(submission(text_a, text_b)) {
        Ok(SubmissionOutcome::Published { question, .. }) => question,
        other => panic!("expected publication, got {:?}", other),
    }
}

//! 予測ページの状態管理
//!
//! 手入力（manual）と一括（batch）それぞれに独立した状態を持つ。
//! 状態は `RequestState` の1値で表し、読込中かつエラーのような組み合わせは作れない。
//!
//! リクエストごとに `Ticket` を発行し、完了時に現在の読込中チケットと一致しない
//! レスポンス（後から届いた古いもの）は捨てる。

use crate::batch_table::BatchTable;
use crate::error::{ServiceError, SubmissionError};
use crate::form::FormState;
use crate::types::{BatchResultRow, PredictionResult, SubmissionRecord};
use crate::verdict::Verdict;

pub const MANUAL_ERROR_MESSAGE: &str = "Analysis failed. Please check your inputs and try again.";
pub const BATCH_ERROR_MESSAGE: &str = "Batch analysis failed. Ensure the file format is correct.";

/// 予測モード（タブ）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Manual,
    Batch,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Manual, Mode::Batch];

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Manual => "Manual Diagnosis",
            Mode::Batch => "Batch Processing",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Mode::Manual => MANUAL_ERROR_MESSAGE,
            Mode::Batch => BATCH_ERROR_MESSAGE,
        }
    }
}

/// 発行済みリクエストの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    mode: Mode,
    seq: u64,
}

impl Ticket {
    pub fn mode(&self) -> Mode {
        self.mode
    }
}

/// 1モード分の状態
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Loading(Ticket),
    Success(T),
    Error(&'static str),
}

impl<T> RequestState<T> {
    fn loading_ticket(&self) -> Option<Ticket> {
        match self {
            RequestState::Loading(ticket) => Some(*ticket),
            _ => None,
        }
    }
}

/// 1モード分の状態機械
#[derive(Debug, Clone, PartialEq)]
pub struct ModeMachine<T> {
    mode: Mode,
    state: RequestState<T>,
    issued: u64,
}

impl<T> ModeMachine<T> {
    pub fn new(mode: Mode) -> Self {
        Self { mode, state: RequestState::Idle, issued: 0 }
    }

    /// 新しいリクエストを開始（前回の結果・エラーは先に消す）
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        let ticket = Ticket { mode: self.mode, seq: self.issued };
        self.state = RequestState::Loading(ticket);
        ticket
    }

    /// レスポンスを反映。古いチケットなら無視して false
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<T, ServiceError>) -> bool {
        if self.state.loading_ticket() != Some(ticket) {
            return false;
        }
        self.state = match outcome {
            Ok(value) => RequestState::Success(value),
            Err(_) => RequestState::Error(self.mode.error_message()),
        };
        true
    }

    /// 待機状態へ戻す（読込中のリクエストも無効になる）
    pub fn reset(&mut self) {
        self.state = RequestState::Idle;
    }

    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading_ticket().is_some()
    }

    pub fn result(&self) -> Option<&T> {
        match &self.state {
            RequestState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&'static str> {
        match self.state {
            RequestState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// 予測ページ全体の状態
///
/// タブを切り替えても、もう一方のモードの状態はそのまま残る。
#[derive(Debug, Clone, PartialEq)]
pub struct PredictController {
    active: Mode,
    manual: ModeMachine<PredictionResult>,
    batch: ModeMachine<Vec<BatchResultRow>>,
}

impl Default for PredictController {
    fn default() -> Self {
        Self {
            active: Mode::Manual,
            manual: ModeMachine::new(Mode::Manual),
            batch: ModeMachine::new(Mode::Batch),
        }
    }
}

impl PredictController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Mode {
        self.active
    }

    /// タブ切り替え（進行中のリクエストは取り消さない）
    pub fn switch_tab(&mut self, mode: Mode) {
        self.active = mode;
    }

    // =============================================
    // 手入力モード
    // =============================================

    /// フォームを送信。必須項目が欠けていれば状態は変えずにエラー
    pub fn submit_manual(
        &mut self,
        form: &FormState,
    ) -> Result<(Ticket, SubmissionRecord), SubmissionError> {
        let record = form.submit()?;
        Ok((self.manual.begin(), record))
    }

    pub fn begin_manual(&mut self) -> Ticket {
        self.manual.begin()
    }

    pub fn complete_manual(
        &mut self,
        ticket: Ticket,
        outcome: Result<PredictionResult, ServiceError>,
    ) -> bool {
        self.manual.complete(ticket, outcome)
    }

    pub fn manual(&self) -> &ModeMachine<PredictionResult> {
        &self.manual
    }

    pub fn manual_verdict(&self) -> Option<Verdict> {
        self.manual.result().map(Verdict::from_result)
    }

    // =============================================
    // 一括モード
    // =============================================

    /// ファイル選択の変化を反映
    ///
    /// 選択ありなら新しいリクエストのチケットを返す。
    /// 解除なら結果を消して待機状態へ（読込中のリクエストも無効）。
    pub fn file_changed(&mut self, selected: bool) -> Option<Ticket> {
        if selected {
            Some(self.batch.begin())
        } else {
            self.batch.reset();
            None
        }
    }

    pub fn complete_batch(
        &mut self,
        ticket: Ticket,
        outcome: Result<Vec<BatchResultRow>, ServiceError>,
    ) -> bool {
        self.batch.complete(ticket, outcome)
    }

    pub fn batch(&self) -> &ModeMachine<Vec<BatchResultRow>> {
        &self.batch
    }

    pub fn batch_table(&self) -> Option<BatchTable> {
        self.batch.result().map(|rows| BatchTable::build(rows))
    }

    // =============================================
    // 表示中タブ
    // =============================================

    pub fn active_error(&self) -> Option<&'static str> {
        match self.active {
            Mode::Manual => self.manual.error(),
            Mode::Batch => self.batch.error(),
        }
    }

    pub fn active_loading(&self) -> bool {
        match self.active {
            Mode::Manual => self.manual.is_loading(),
            Mode::Batch => self.batch.is_loading(),
        }
    }
}

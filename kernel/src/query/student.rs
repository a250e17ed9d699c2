use crate::database::Transaction;
use crate::entity::{IdCard, SelectLimit, SelectOffset, Student, StudentId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait StudentQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &StudentId,
    ) -> error_stack::Result<Option<Student>, KernelError>;

    async fn find_all(
        &self,
        con: &mut Connection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Student>, KernelError>;
}

pub trait DependOnStudentQuery<Connection: Transaction>: Sync + Send + 'static {
    type StudentQuery: StudentQuery<Connection>;
    fn student_query(&self) -> &Self::StudentQuery;
}

/// The eligibility gate reads the card through this contract at rent time,
/// inside the rent transaction. No caching.
#[async_trait::async_trait]
pub trait IdCardQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_student_id(
        &self,
        con: &mut Connection,
        student_id: &StudentId,
    ) -> error_stack::Result<Option<IdCard>, KernelError>;
}

pub trait DependOnIdCardQuery<Connection: Transaction>: Sync + Send + 'static {
    type IdCardQuery: IdCardQuery<Connection>;
    fn id_card_query(&self) -> &Self::IdCardQuery;
}

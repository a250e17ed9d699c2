use crate::database::Transaction;
use crate::entity::{
    CardStatus, EmailAddress, IdCard, IdCardId, Student, StudentAge, StudentId, StudentName,
};
use crate::KernelError;

#[async_trait::async_trait]
pub trait StudentModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        student: &Student,
    ) -> error_stack::Result<(), KernelError>;

    async fn update(
        &self,
        con: &mut Connection,
        id: &StudentId,
        first_name: Option<StudentName>,
        last_name: Option<StudentName>,
        email: Option<EmailAddress>,
        age: Option<StudentAge>,
    ) -> error_stack::Result<Option<Student>, KernelError>;

    async fn delete(
        &self,
        con: &mut Connection,
        student_id: &StudentId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnStudentModifier<Connection: Transaction>: 'static + Sync + Send {
    type StudentModifier: StudentModifier<Connection>;
    fn student_modifier(&self) -> &Self::StudentModifier;
}

#[async_trait::async_trait]
pub trait IdCardModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        card: &IdCard,
    ) -> error_stack::Result<(), KernelError>;

    /// Administrative status change; the rental workflow only ever reads.
    async fn update_status(
        &self,
        con: &mut Connection,
        card_id: &IdCardId,
        status: CardStatus,
    ) -> error_stack::Result<Option<IdCard>, KernelError>;
}

pub trait DependOnIdCardModifier<Connection: Transaction>: 'static + Sync + Send {
    type IdCardModifier: IdCardModifier<Connection>;
    fn id_card_modifier(&self) -> &Self::IdCardModifier;
}
